use crate::classifiers::classifier::{Classifier, check_instance_header};
use crate::classifiers::decision_tree::nodes::{Split, TreeNode};
use crate::classifiers::decision_tree::params::{DecisionTreeParams, UnseenValuePolicy};
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::distribution::ClassDistribution;
use crate::classifiers::ClassifierError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::core::table::{LabeledTable, TableView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Facts about a fitted tree, kept for inspection only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeMetadata {
    pub target: String,
    pub training_rows: usize,
    pub depth: usize,
    pub num_nodes: usize,
    pub num_leaves: usize,
}

/// A gain-ratio decision tree over categorical attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    root: TreeNode,
    unseen_value: UnseenValuePolicy,
    metadata: TreeMetadata,
}

impl DecisionTree {
    /// Grows a tree on every row of `table`, predicting its class attribute.
    pub fn fit(table: &LabeledTable, params: &DecisionTreeParams) -> Result<Self, ClassifierError> {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::fit_with_rng(table, params, &mut rng)
    }

    /// Same as [`DecisionTree::fit`] but draws candidate subsets from `rng`.
    #[instrument(skip_all, fields(rows = table.len(), relation = table.header().relation_name()))]
    pub fn fit_with_rng<R: Rng + ?Sized>(
        table: &LabeledTable,
        params: &DecisionTreeParams,
        rng: &mut R,
    ) -> Result<Self, ClassifierError> {
        params.validate()?;
        if table.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }

        let criterion = params.split_criterion.criterion();
        let mut inducer = TreeInducer {
            criterion: criterion.as_ref(),
            max_candidate_attributes: params.max_candidate_attributes,
            rng,
        };
        let root = inducer.grow(table.view())?;

        let header = Arc::clone(table.header());
        let metadata = TreeMetadata {
            target: header.class_attribute().name().to_string(),
            training_rows: table.len(),
            depth: root.depth(),
            num_nodes: root.num_nodes(),
            num_leaves: root.num_leaves(),
        };
        debug!(
            depth = metadata.depth,
            nodes = metadata.num_nodes,
            leaves = metadata.num_leaves,
            "decision tree grown"
        );

        Ok(Self {
            header,
            root,
            unseen_value: params.unseen_value,
            metadata,
        })
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn metadata(&self) -> &TreeMetadata {
        &self.metadata
    }

    pub fn unseen_value_policy(&self) -> UnseenValuePolicy {
        self.unseen_value
    }

    pub fn number_of_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    /// Level-order rendering of every node: depth, split and distribution.
    pub fn describe(&self) -> String {
        let class_attribute = self.header.class_attribute();
        let mut out = String::new();
        for (depth, node) in self.root.breadth_first() {
            let split = match node.split() {
                Split::Pure => "pure".to_string(),
                Split::Exhausted => "exhausted".to_string(),
                Split::Attribute(a) => self.header.attribute_name(a).to_string(),
            };
            let probs = node
                .observed_class_distribution()
                .labeled(class_attribute)
                .iter()
                .map(|(label, p)| format!("{label}: {p:.3}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{:indent$}{split} [{}] rows={} {{{probs}}}",
                "",
                class_attribute.name(),
                node.num_rows(),
                indent = depth * 2
            );
        }
        out
    }
}

impl Classifier for DecisionTree {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<ClassDistribution, ClassifierError> {
        check_instance_header(&self.header, instance)?;
        let found = self.root.filter_instance_to_leaf(instance)?;
        match (found.missing_branch(), self.unseen_value) {
            (None, _) | (Some(_), UnseenValuePolicy::ParentDistribution) => {
                Ok(found.node().observed_class_distribution().clone())
            }
            (Some((attribute, value)), UnseenValuePolicy::Fail) => {
                let attr = self
                    .header
                    .attribute_at_index(attribute)
                    .ok_or_else(|| ClassifierError::UnknownAttribute(attribute.to_string()))?;
                Err(ClassifierError::UnseenValue {
                    attribute: attr.name().to_string(),
                    value: attr.value(value).unwrap_or("?").to_string(),
                })
            }
        }
    }
}

struct TreeInducer<'c, 'r, R: Rng + ?Sized> {
    criterion: &'c (dyn SplitCriterion + Send + Sync),
    max_candidate_attributes: Option<usize>,
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> TreeInducer<'_, '_, R> {
    fn grow(&mut self, view: TableView<'_>) -> Result<TreeNode, ClassifierError> {
        let distribution = ClassDistribution::from_counts(&view.class_counts())?;
        if view.is_pure() {
            return Ok(TreeNode::leaf(distribution, Split::Pure, view.len()));
        }

        let Some(attribute) = self.split_on(&view)? else {
            return Ok(TreeNode::leaf(distribution, Split::Exhausted, view.len()));
        };

        let mut children = BTreeMap::new();
        for (value, subset) in view.partition(attribute) {
            children.insert(value, self.grow(subset)?);
        }
        Ok(TreeNode::split_node(distribution, attribute, children, view.len()))
    }

    /// Best-merit attribute among the non-constant candidates; the first in
    /// header order wins ties. `None` when nothing is left to split on.
    fn split_on(&mut self, view: &TableView<'_>) -> Result<Option<usize>, ClassifierError> {
        let candidates: Vec<usize> = view
            .attributes()
            .iter()
            .copied()
            .filter(|&a| view.unique_values(a).len() > 1)
            .collect();
        let candidates = self.sample_candidates(candidates);

        let mut best: Option<(usize, f64)> = None;
        for attribute in candidates {
            let merit = self.criterion.merit_of_split(view, attribute)?;
            trace!(attribute = view.header().attribute_name(attribute), merit, "candidate split");
            if best.is_none_or(|(_, m)| merit > m) {
                best = Some((attribute, merit));
            }
        }
        if let Some((attribute, merit)) = best {
            debug!(
                attribute = view.header().attribute_name(attribute),
                merit,
                rows = view.len(),
                "split chosen"
            );
        }
        Ok(best.map(|(attribute, _)| attribute))
    }

    fn sample_candidates(&mut self, candidates: Vec<usize>) -> Vec<usize> {
        match self.max_candidate_attributes {
            Some(k) if k < candidates.len() => {
                let mut picked =
                    rand::seq::index::sample(&mut *self.rng, candidates.len(), k).into_vec();
                picked.sort_unstable();
                picked.into_iter().map(|i| candidates[i]).collect()
            }
            _ => candidates,
        }
    }
}
