use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::split_criteria::SplitCriterionChoice;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// What inference does when a split node has no child for the observed value.
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
pub enum UnseenValuePolicy {
    /// Return [`ClassifierError::UnseenValue`].
    #[default]
    Fail,
    /// Answer with the distribution of the node that lacks the child.
    ParentDistribution,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionTreeParams {
    #[serde(default)]
    #[schemars(
        title = "Split criterion",
        description = "Merit used to rank candidate attributes."
    )]
    pub split_criterion: SplitCriterionChoice,

    #[serde(default)]
    #[schemars(
        title = "Candidate attributes per node",
        description = "Random subset size considered at each node; all attributes when unset."
    )]
    pub max_candidate_attributes: Option<usize>,

    #[serde(default)]
    #[schemars(
        title = "Unseen value policy",
        description = "Behaviour when inference meets a value without a trained branch."
    )]
    pub unseen_value: UnseenValuePolicy,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "Seed for candidate subsampling; drawn from the OS when unset."
    )]
    pub seed: Option<u64>,
}

impl DecisionTreeParams {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.max_candidate_attributes == Some(0) {
            return Err(ClassifierError::InvalidParameter(
                "max_candidate_attributes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::schema_for;
    use serde_json::{Value, json};

    #[test]
    fn serde_missing_fields_apply_defaults() {
        let p: DecisionTreeParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, DecisionTreeParams::default());
        assert_eq!(p.split_criterion, SplitCriterionChoice::GainRatio);
        assert_eq!(p.unseen_value, UnseenValuePolicy::Fail);
    }

    #[test]
    fn serde_uses_kebab_case_choices() {
        let p: DecisionTreeParams = serde_json::from_value(json!({
            "split_criterion": "info-gain",
            "unseen_value": "parent-distribution",
            "max_candidate_attributes": 2
        }))
        .unwrap();
        assert_eq!(p.split_criterion, SplitCriterionChoice::InfoGain);
        assert_eq!(p.unseen_value, UnseenValuePolicy::ParentDistribution);
        assert_eq!(p.max_candidate_attributes, Some(2));
    }

    #[test]
    fn schema_lists_every_field() {
        let v = serde_json::to_value(schema_for!(DecisionTreeParams)).expect("schema to JSON");
        let props = v.get("properties").and_then(Value::as_object).unwrap();
        for key in ["split_criterion", "max_candidate_attributes", "unseen_value", "seed"] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn zero_candidates_is_rejected() {
        let p = DecisionTreeParams {
            max_candidate_attributes: Some(0),
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(ClassifierError::InvalidParameter(_))));
    }
}
