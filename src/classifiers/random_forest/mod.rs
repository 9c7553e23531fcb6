pub mod bootstrap;
mod forest;
mod params;
mod random_forest;

pub use bootstrap::{bootstrap, bootstrap_indices, bootstrap_table};
pub use forest::Forest;
pub use params::{RandomForestParams, TieBreak};
pub use random_forest::RandomForest;
