//! Errors raised while reading, writing or validating relay instances.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The instance file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The instance does not describe five swimmers with four legs each.
    #[error("invalid instance: expected {expected} {what}, found {found}")]
    InvalidShape {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),
}

impl RelayError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        RelayError::Io { path: path.to_string(), source }
    }
}
