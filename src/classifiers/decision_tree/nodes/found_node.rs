use crate::classifiers::decision_tree::nodes::TreeNode;

/// Outcome of routing an instance down a tree.
#[derive(Debug, Clone, Copy)]
pub struct FoundNode<'a> {
    node: &'a TreeNode,
    parent_branch: Option<usize>,
    missing_branch: Option<(usize, usize)>,
}

impl<'a> FoundNode<'a> {
    pub fn new(
        node: &'a TreeNode,
        parent_branch: Option<usize>,
        missing_branch: Option<(usize, usize)>,
    ) -> Self {
        Self {
            node,
            parent_branch,
            missing_branch,
        }
    }

    /// Deepest node reached.
    pub fn node(&self) -> &'a TreeNode {
        self.node
    }

    /// Value index of the branch that led to `node`; `None` at the root.
    pub fn parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }

    /// `(attribute, value)` the walk could not follow, if any.
    pub fn missing_branch(&self) -> Option<(usize, usize)> {
        self.missing_branch
    }

    pub fn reached_leaf(&self) -> bool {
        self.missing_branch.is_none()
    }
}
