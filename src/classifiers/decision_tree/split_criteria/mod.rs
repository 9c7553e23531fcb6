mod entropy;
mod gain_ratio_split_criterion;
mod info_gain_split_criterion;
mod split_criterion;

pub use entropy::{entropy, information_gain, information_gain_ratio, intrinsic_value};
pub use gain_ratio_split_criterion::GainRatioSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::{SplitCriterion, SplitCriterionChoice};
