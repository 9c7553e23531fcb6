use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::split_criteria::SplitCriterionChoice;
use crate::classifiers::decision_tree::{DecisionTreeParams, UnseenValuePolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

fn default_n_trees() -> usize {
    100
}
fn default_bootstrap() -> bool {
    true
}
fn default_unseen_value() -> UnseenValuePolicy {
    UnseenValuePolicy::ParentDistribution
}

/// How a hard label is picked when several classes share the top probability.
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
pub enum TieBreak {
    /// Uniformly at random among the tied classes.
    #[default]
    Random,
    /// The tied class with the smallest index. Deterministic.
    LowestIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RandomForestParams {
    #[serde(default = "default_n_trees")]
    #[schemars(title = "Number of trees", description = "Trees grown by `fit`.")]
    pub n_trees: usize,

    #[serde(default)]
    #[schemars(
        title = "Attributes per split",
        description = "Candidate attributes per node when restriction is on; floor(sqrt(d)) when unset."
    )]
    pub n_attrs: Option<usize>,

    #[serde(default)]
    #[schemars(
        title = "Restrict attributes?",
        description = "Let each node consider only a random subset of `n_attrs` attributes."
    )]
    pub restrict_attributes: bool,

    #[serde(default = "default_bootstrap")]
    #[schemars(
        title = "Bootstrap?",
        description = "Train each tree on a with-replacement resample; otherwise on the full table."
    )]
    pub bootstrap: bool,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "Master seed for per-tree random streams; drawn from the OS when unset."
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(title = "Tie break", description = "Hard-label choice among tied classes.")]
    pub tie_break: TieBreak,

    /// Per-tree policy for values a tree never saw. Bootstrap samples often
    /// miss values present in the full table, so forests default to
    /// [`UnseenValuePolicy::ParentDistribution`]; `Fail` stays selectable.
    #[serde(default = "default_unseen_value")]
    #[schemars(skip)]
    pub unseen_value: UnseenValuePolicy,

    #[serde(default)]
    #[schemars(skip)]
    pub split_criterion: SplitCriterionChoice,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_trees: default_n_trees(),
            n_attrs: None,
            restrict_attributes: false,
            bootstrap: default_bootstrap(),
            seed: None,
            tie_break: TieBreak::default(),
            unseen_value: default_unseen_value(),
            split_criterion: SplitCriterionChoice::default(),
        }
    }
}

impl RandomForestParams {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.n_trees == 0 {
            return Err(ClassifierError::InvalidParameter(
                "n_trees must be at least 1".into(),
            ));
        }
        if self.n_attrs == Some(0) {
            return Err(ClassifierError::InvalidParameter(
                "n_attrs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Attribute subsample size for a table with `num_attributes` inputs.
    pub fn resolve_n_attrs(&self, num_attributes: usize) -> Result<usize, ClassifierError> {
        match self.n_attrs {
            Some(n) if n == 0 || n > num_attributes => Err(ClassifierError::InvalidParameter(
                format!("n_attrs resolved to {n}, must be in [1, {num_attributes}]"),
            )),
            Some(n) => Ok(n),
            None => Ok(((num_attributes as f64).sqrt().floor() as usize)
                .max(1)
                .min(num_attributes)),
        }
    }

    /// Parameters every tree of the forest is grown with. `n_attrs` is only
    /// resolved, and so only checked against `num_attributes`, when
    /// `restrict_attributes` is set.
    pub(crate) fn tree_params(
        &self,
        num_attributes: usize,
    ) -> Result<DecisionTreeParams, ClassifierError> {
        let max_candidate_attributes = if self.restrict_attributes && num_attributes > 0 {
            Some(self.resolve_n_attrs(num_attributes)?)
        } else {
            None
        };
        Ok(DecisionTreeParams {
            split_criterion: self.split_criterion,
            max_candidate_attributes,
            unseen_value: self.unseen_value,
            seed: None,
        })
    }
}
