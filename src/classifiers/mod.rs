pub mod classifier;
pub mod decision_tree;
pub mod distribution;
mod error;
pub mod random_forest;

pub use classifier::Classifier;
pub use decision_tree::{DecisionTree, DecisionTreeParams};
pub use distribution::ClassDistribution;
pub use error::ClassifierError;
pub use random_forest::{Forest, RandomForest, RandomForestParams};
