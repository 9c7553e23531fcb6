use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::split_criteria::information_gain;
use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;
use crate::core::table::TableView;

/// Plain ID3 gain. Favors attributes with many values.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn merit_of_split(&self, view: &TableView<'_>, attribute: usize) -> Result<f64, ClassifierError> {
        information_gain(view, attribute)
    }
}
