use std::fmt::{self, Display};

use crate::path::PathError;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidPath(PathError),
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidPath(err) => write!(f, "invalid path: {err}"),
            ModelError::InvalidId(msg) => write!(f, "invalid id: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidPath(err) => Some(err),
            ModelError::InvalidId(_) => None,
        }
    }
}

impl From<PathError> for ModelError {
    fn from(err: PathError) -> Self {
        ModelError::InvalidPath(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
