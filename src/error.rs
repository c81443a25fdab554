//! Error handling for the career compass application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerCompassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Assessment incomplete: {0}")]
    IncompleteAssessment(String),

    #[error("Quiz error: {0}")]
    Quiz(String),
}

pub type Result<T> = std::result::Result<T, CareerCompassError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerCompassError {
    fn from(err: anyhow::Error) -> Self {
        CareerCompassError::Backend(err.to_string())
    }
}
