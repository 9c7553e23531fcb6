mod evaluators;
mod measurement;

pub use evaluators::{ClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt, evaluate};
pub use measurement::Measurement;
