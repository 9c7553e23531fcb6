mod breadth_first;
mod found_node;
mod tree_node;

pub use breadth_first::BreadthFirst;
pub use found_node::FoundNode;
pub use tree_node::{Split, TreeNode};
