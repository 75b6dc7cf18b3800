use std::fmt::{self, Display};

/// Errors produced by model constructors and strict parsing routines.
///
/// Callers that want fail-soft behavior (URL parameter handling) catch these
/// and substitute defaults instead of surfacing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidSort(String),
    InvalidDuration(String),
    InvalidColumns(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSort(msg) => write!(f, "invalid sort: {msg}"),
            ModelError::InvalidDuration(msg) => {
                write!(f, "invalid duration range: {msg}")
            }
            ModelError::InvalidColumns(msg) => {
                write!(f, "invalid column count: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
