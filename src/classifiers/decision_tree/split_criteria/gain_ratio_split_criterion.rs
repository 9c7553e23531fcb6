use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::split_criteria::information_gain_ratio;
use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;
use crate::core::table::TableView;

#[derive(Debug, Default, Clone, Copy)]
pub struct GainRatioSplitCriterion {}

impl GainRatioSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }
}

impl SplitCriterion for GainRatioSplitCriterion {
    fn merit_of_split(&self, view: &TableView<'_>, attribute: usize) -> Result<f64, ClassifierError> {
        information_gain_ratio(view, attribute)
    }
}
