use thiserror::Error;

use crate::errors::domain::DomainError;

/// Failures of the shell and binary around the scoring core.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
