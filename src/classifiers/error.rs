use thiserror::Error;

/// Errors raised while building tables, inducing models or predicting.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Gain ratio asked for an attribute that is constant on the subset.
    #[error("degenerate split on `{attribute}`: attribute has a single observed value")]
    DegenerateSplit { attribute: String },

    /// Inference reached a node with no child for the observed value.
    #[error("value `{value}` of `{attribute}` was never seen at this node during training")]
    UnseenValue { attribute: String, value: String },

    #[error("cannot compute entropy or gain over an empty subset")]
    EmptySubset,

    #[error("instance has no value for split attribute `{0}`")]
    MissingAttribute(String),

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("unknown value `{value}` for attribute `{attribute}`")]
    UnknownValue { attribute: String, value: String },

    #[error("value index {index} of `{attribute}` outside domain of size {domain_size}")]
    ValueOutOfDomain {
        attribute: String,
        index: usize,
        domain_size: usize,
    },

    #[error("row {row} has {got} values, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("training table has zero rows")]
    EmptyDataset,

    #[error("inputs and labels differ in length: {inputs} vs {labels}")]
    LengthMismatch { inputs: usize, labels: usize },

    /// Instance or tree built on a schema other than the model's.
    #[error("instance header of relation `{got}` does not match model header of relation `{expected}`")]
    HeaderMismatch { expected: String, got: String },

    #[error("expected {expected} classes, got {got}")]
    ClassCountMismatch { expected: usize, got: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("model has not been fitted")]
    NotFitted,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
