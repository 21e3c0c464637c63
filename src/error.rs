// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Format(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to save {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl QueryError {
    pub fn unexpected_format() -> Self {
        QueryError::Format("Unexpected response format".to_string())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QueryError::Io {
            path: path.into(),
            source,
        }
    }

    /// Status code carried by an HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
