// src/error.rs
// Error taxonomy for the coaching service

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the csm-coach library
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("template '{name}' not found at {}", path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("failed to read template '{name}': {source}")]
    TemplateReadError {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("completion provider error: {0}")]
    CompletionProvider(String),

    #[error("invalid field '{field}': {reason}")]
    SchemaViolation { field: &'static str, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using CoachError
pub type Result<T> = std::result::Result<T, CoachError>;

impl CoachError {
    /// Short caller-facing text. Paths and provider bodies stay in the logs.
    pub fn short_message(&self) -> String {
        match self {
            Self::TemplateNotFound { name, .. } => format!("template '{}' not found", name),
            Self::TemplateReadError { name, .. } => format!("template '{}' could not be read", name),
            Self::CompletionProvider(_) => "completion provider request failed".to_string(),
            Self::SchemaViolation { .. } => self.to_string(),
            Self::Config(_) => "service is misconfigured".to_string(),
        }
    }
}

impl From<reqwest::Error> for CoachError {
    fn from(err: reqwest::Error) -> Self {
        CoachError::CompletionProvider(err.to_string())
    }
}
