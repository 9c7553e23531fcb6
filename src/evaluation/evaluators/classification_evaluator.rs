use crate::classifiers::ClassDistribution;
use crate::core::instances::Instance;
use crate::evaluation::{Measurement, PerformanceEvaluator};

/// Confusion-matrix evaluator for nominal targets.
///
/// The predicted class is the highest-probability class, lowest index on
/// ties. Reports:
/// - `accuracy` and `error_rate`;
/// - Cohen's `kappa` against the chance agreement of the two marginals;
/// - `kappa_m`, accuracy relative to always predicting the majority true class.
///
/// Per-class precision and recall are appended when enabled.
#[derive(Debug, Clone)]
pub struct ClassificationEvaluator {
    /// `confusion[truth][predicted]`
    confusion: Vec<Vec<f64>>,
    total: f64,
    show_per_class: bool,
}

impl ClassificationEvaluator {
    pub fn new(num_classes: usize) -> Self {
        Self {
            confusion: vec![vec![0.0; num_classes]; num_classes],
            total: 0.0,
            show_per_class: false,
        }
    }

    pub fn with_per_class(mut self, show: bool) -> Self {
        self.show_per_class = show;
        self
    }

    pub fn num_classes(&self) -> usize {
        self.confusion.len()
    }

    pub fn confusion_matrix(&self) -> &[Vec<f64>] {
        &self.confusion
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    fn ensure_classes(&mut self, k: usize) {
        if k <= self.confusion.len() {
            return;
        }
        for row in &mut self.confusion {
            row.resize(k, 0.0);
        }
        self.confusion.resize(k, vec![0.0; k]);
    }

    fn correct(&self) -> f64 {
        (0..self.num_classes()).map(|c| self.confusion[c][c]).sum()
    }

    fn true_count(&self, class: usize) -> f64 {
        self.confusion[class].iter().sum()
    }

    fn predicted_count(&self, class: usize) -> f64 {
        self.confusion.iter().map(|row| row[class]).sum()
    }
}

fn ratio(num: f64, denom: f64) -> f64 {
    if denom.abs() > f64::EPSILON {
        num / denom
    } else {
        f64::NAN
    }
}

impl PerformanceEvaluator for ClassificationEvaluator {
    fn reset(&mut self) {
        *self = Self::new(self.num_classes()).with_per_class(self.show_per_class);
    }

    fn add_result(&mut self, instance: &dyn Instance, votes: &ClassDistribution) {
        let Some(truth) = instance.class_value() else {
            return;
        };
        let Some(predicted) = votes.predicted_class() else {
            return;
        };
        self.ensure_classes(truth.max(predicted) + 1);
        self.confusion[truth][predicted] += 1.0;
        self.total += 1.0;
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = if self.total <= 0.0 {
            vec![
                Measurement::new("accuracy", f64::NAN),
                Measurement::new("error_rate", f64::NAN),
                Measurement::new("kappa", 0.0),
                Measurement::new("kappa_m", 0.0),
            ]
        } else {
            let p_o = self.correct() / self.total;
            let p_e: f64 = (0..self.num_classes())
                .map(|c| (self.true_count(c) / self.total) * (self.predicted_count(c) / self.total))
                .sum();
            let acc_majority = (0..self.num_classes())
                .map(|c| self.true_count(c) / self.total)
                .fold(0.0, f64::max);
            vec![
                Measurement::new("accuracy", p_o),
                Measurement::new("error_rate", 1.0 - p_o),
                Measurement::new("kappa", ratio(p_o - p_e, 1.0 - p_e)),
                Measurement::new("kappa_m", ratio(p_o - acc_majority, 1.0 - acc_majority)),
            ]
        };

        // empty classes report NaN
        if self.show_per_class {
            for c in 0..self.num_classes() {
                let hits = self.confusion[c][c];
                m.push(Measurement::new(
                    format!("precision_class_{c}"),
                    ratio(hits, self.predicted_count(c)),
                ));
                m.push(Measurement::new(
                    format!("recall_class_{c}"),
                    ratio(hits, self.true_count(c)),
                ));
            }
        }
        m
    }
}
