//! Gain-ratio decision trees and random forests over nominal tables.

pub mod classifiers;
pub mod core;
pub mod evaluation;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
