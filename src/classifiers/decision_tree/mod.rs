mod decision_tree;
pub mod nodes;
mod params;
pub mod split_criteria;

pub use decision_tree::{DecisionTree, TreeMetadata};
pub use params::{DecisionTreeParams, UnseenValuePolicy};
