use crate::classifiers::ClassifierError;
use crate::core::attributes::NominalAttribute;
use crate::utils::math::{max_indices, normalize};
use serde::{Deserialize, Serialize};

/// Probability of each class, aligned to the class attribute's full domain.
///
/// Classes never observed carry an explicit `0.0`, so distributions coming
/// from different trees can be summed position by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDistribution {
    probs: Vec<f64>,
}

impl ClassDistribution {
    pub fn from_counts(counts: &[f64]) -> Result<Self, ClassifierError> {
        Ok(Self {
            probs: normalize(counts).ok_or(ClassifierError::EmptySubset)?,
        })
    }

    pub fn from_probs(probs: Vec<f64>) -> Self {
        Self { probs }
    }

    /// All mass on `class`.
    pub fn degenerate(num_classes: usize, class: usize) -> Result<Self, ClassifierError> {
        if class >= num_classes {
            return Err(ClassifierError::InvalidParameter(format!(
                "class {class} out of range for {num_classes} classes"
            )));
        }
        let mut probs = vec![0.0; num_classes];
        probs[class] = 1.0;
        Ok(Self { probs })
    }

    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    pub fn into_probs(self) -> Vec<f64> {
        self.probs
    }

    pub fn probability(&self, class: usize) -> f64 {
        self.probs.get(class).copied().unwrap_or(0.0)
    }

    pub fn num_classes(&self) -> usize {
        self.probs.len()
    }

    pub fn is_pure(&self) -> bool {
        self.probs.iter().filter(|&&p| p > 0.0).count() == 1
    }

    /// Every class sharing the highest probability, lowest index first.
    pub fn majority_classes(&self) -> Vec<usize> {
        max_indices(&self.probs)
    }

    pub fn predicted_class(&self) -> Option<usize> {
        self.majority_classes().first().copied()
    }

    /// `(label, probability)` for each class with non-zero mass.
    pub fn labeled<'a>(&self, class_attribute: &'a NominalAttribute) -> Vec<(&'a str, f64)> {
        self.probs
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > 0.0)
            .filter_map(|(i, &p)| class_attribute.value(i).map(|label| (label, p)))
            .collect()
    }
}
