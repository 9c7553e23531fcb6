use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::split_criteria::{
    GainRatioSplitCriterion, InfoGainSplitCriterion,
};
use crate::core::table::TableView;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub trait SplitCriterion {
    /// Merit of partitioning `view` on `attribute`; higher is better.
    fn merit_of_split(&self, view: &TableView<'_>, attribute: usize) -> Result<f64, ClassifierError>;
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SplitCriterionChoice {
    /// Information gain normalized by the attribute's intrinsic value.
    #[default]
    GainRatio,
    /// Raw information gain.
    InfoGain,
}

impl SplitCriterionChoice {
    pub fn criterion(self) -> Box<dyn SplitCriterion + Send + Sync> {
        match self {
            SplitCriterionChoice::GainRatio => Box::new(GainRatioSplitCriterion::new()),
            SplitCriterionChoice::InfoGain => Box::new(InfoGainSplitCriterion::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn choices_parse_from_kebab_case() {
        assert_eq!(
            SplitCriterionChoice::from_str("gain-ratio").unwrap(),
            SplitCriterionChoice::GainRatio
        );
        assert_eq!(SplitCriterionChoice::InfoGain.to_string(), "info-gain");
        assert_eq!(SplitCriterionChoice::iter().count(), 2);
    }
}
