use crate::classifiers::decision_tree::nodes::TreeNode;
use std::collections::VecDeque;

/// Level-order walk yielding `(depth, node)`, root at depth 0.
pub struct BreadthFirst<'a> {
    queue: VecDeque<(usize, &'a TreeNode)>,
}

impl<'a> BreadthFirst<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((0, root));
        Self { queue }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.queue.pop_front()?;
        for child in node.children().values() {
            self.queue.push_back((depth + 1, child));
        }
        Some((depth, node))
    }
}
