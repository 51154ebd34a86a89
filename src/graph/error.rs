use thiserror::Error;

/// Errors raised while building or editing an attribute graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Area already exists: {0}")]
    DuplicateArea(String),

    #[error("Unknown area: {0}")]
    UnknownArea(String),

    #[error("An area cannot be adjacent to itself: {0}")]
    SelfAdjacency(String),

    #[error("Areas {0} and {1} are not adjacent")]
    NotAdjacent(String, String),

    #[error("Expected {expected} attribute values, got {got}")]
    AttributeLengthMismatch { expected: usize, got: usize },
}
