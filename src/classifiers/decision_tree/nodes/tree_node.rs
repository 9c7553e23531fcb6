use crate::classifiers::ClassifierError;
use crate::classifiers::decision_tree::nodes::{BreadthFirst, FoundNode};
use crate::classifiers::distribution::ClassDistribution;
use crate::core::instances::Instance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a node stops or which attribute it tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "attribute", rename_all = "kebab-case")]
pub enum Split {
    /// Every row reaching the node has the same class.
    Pure,
    /// Rows disagree but no attribute is left that separates them.
    Exhausted,
    /// Children are keyed by the value index of this attribute.
    Attribute(usize),
}

/// One node of a fitted tree. A node owns its children outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    observed_class_distribution: ClassDistribution,
    split: Split,
    children: BTreeMap<usize, TreeNode>,
    num_rows: usize,
}

impl TreeNode {
    pub fn leaf(observed_class_distribution: ClassDistribution, split: Split, num_rows: usize) -> Self {
        Self {
            observed_class_distribution,
            split,
            children: BTreeMap::new(),
            num_rows,
        }
    }

    pub fn split_node(
        observed_class_distribution: ClassDistribution,
        attribute: usize,
        children: BTreeMap<usize, TreeNode>,
        num_rows: usize,
    ) -> Self {
        Self {
            observed_class_distribution,
            split: Split::Attribute(attribute),
            children,
            num_rows,
        }
    }

    pub fn observed_class_distribution(&self) -> &ClassDistribution {
        &self.observed_class_distribution
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn split_attribute(&self) -> Option<usize> {
        match self.split {
            Split::Attribute(a) => Some(a),
            Split::Pure | Split::Exhausted => None,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn children(&self) -> &BTreeMap<usize, TreeNode> {
        &self.children
    }

    pub fn child(&self, value: usize) -> Option<&TreeNode> {
        self.children.get(&value)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of split levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn num_nodes(&self) -> usize {
        self.breadth_first().count()
    }

    pub fn num_leaves(&self) -> usize {
        self.breadth_first().filter(|(_, n)| n.is_leaf()).count()
    }

    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(self)
    }

    /// Walks from this node towards a leaf following `instance`'s values.
    ///
    /// Stops early, without error, at the first node that has no child for
    /// the instance's value; the returned [`FoundNode`] records which branch
    /// was missing so the caller can decide what to do.
    pub fn filter_instance_to_leaf<'a>(
        &'a self,
        instance: &dyn Instance,
    ) -> Result<FoundNode<'a>, ClassifierError> {
        let mut node = self;
        let mut parent_branch = None;
        while let Split::Attribute(attribute) = node.split {
            if node.is_leaf() {
                break;
            }
            let value = instance.value_at_index(attribute).ok_or_else(|| {
                ClassifierError::MissingAttribute(
                    instance.header().attribute_name(attribute).to_string(),
                )
            })?;
            match node.child(value) {
                Some(child) => {
                    parent_branch = Some(value);
                    node = child;
                }
                None => {
                    return Ok(FoundNode::new(node, parent_branch, Some((attribute, value))));
                }
            }
        }
        Ok(FoundNode::new(node, parent_branch, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;
    use crate::testing::dummies::header_weather;

    fn make_tree() -> TreeNode {
        let yes = TreeNode::leaf(ClassDistribution::degenerate(2, 0).unwrap(), Split::Pure, 2);
        let no = TreeNode::leaf(ClassDistribution::degenerate(2, 1).unwrap(), Split::Pure, 2);
        let mut children = BTreeMap::new();
        children.insert(0, yes);
        children.insert(1, no);
        TreeNode::split_node(
            ClassDistribution::from_counts(&[2.0, 2.0]).unwrap(),
            0,
            children,
            4,
        )
    }

    #[test]
    fn counts_depth_nodes_and_leaves() {
        let tree = make_tree();
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.num_nodes(), 3);
        assert_eq!(tree.num_leaves(), 2);
        assert_eq!(tree.split_attribute(), Some(0));
        assert!(tree.child(1).unwrap().is_leaf());
    }

    #[test]
    fn filter_routes_to_matching_leaf() {
        let tree = make_tree();
        let inst = DenseInstance::from_labels(header_weather(), [("weather", "rainy")]).unwrap();
        let found = tree.filter_instance_to_leaf(&inst).unwrap();
        assert!(found.reached_leaf());
        assert_eq!(found.parent_branch(), Some(1));
        assert_eq!(found.node().observed_class_distribution().probs(), &[0.0, 1.0]);
    }

    #[test]
    fn filter_stops_at_missing_branch() {
        let tree = make_tree();
        let inst = DenseInstance::from_labels(header_weather(), [("weather", "overcast")]).unwrap();
        let found = tree.filter_instance_to_leaf(&inst).unwrap();
        assert!(!found.reached_leaf());
        assert_eq!(found.parent_branch(), None);
        assert_eq!(found.missing_branch(), Some((0, 2)));
        assert_eq!(found.node().num_rows(), 4);
    }

    #[test]
    fn filter_requires_split_value() {
        let tree = make_tree();
        let inst = DenseInstance::new(header_weather(), vec![None, Some(0), None]).unwrap();
        let err = tree.filter_instance_to_leaf(&inst).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingAttribute(ref a) if a == "weather"));
    }
}
