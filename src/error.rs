//! Error types

use thiserror::Error;

/// Errors that abort a paint call or a settings load
#[derive(Debug, Error)]
pub enum FleckError {
    #[error("property '{name}' is missing")]
    MissingParameter { name: String },

    #[error("property '{name}' has malformed value '{value}': {reason}")]
    MalformedParameter {
        name: String,
        value: String,
        reason: &'static str,
    },

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl FleckError {
    pub(crate) fn malformed(name: &str, value: &str, reason: &'static str) -> Self {
        FleckError::MalformedParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}
