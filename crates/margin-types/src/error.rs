use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid side: {0:?} (expected \"original\" or \"modified\")")]
    InvalidSide(String),

    #[error("invalid line kind: {0:?}")]
    InvalidLineKind(String),

    #[error("unknown diff algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
