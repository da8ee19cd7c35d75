use thiserror::Error;

use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum StrictModeError {
    #[error("policy operation '{operation}' failed: {message}")]
    Platform { operation: String, message: String },

    #[error("{scope} policy slot is poisoned")]
    StorePoisoned { scope: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl StrictModeError {
    /// Shorthand for a failed host policy operation
    pub fn platform(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Platform {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
