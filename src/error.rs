//! Error types for the lambdeploy CLI.
//!
//! Rendering itself cannot fail; these cover the config file, terminal I/O,
//! and the (unreachable in practice) case of a broken built-in template.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for lambdeploy operations.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The preset file could not be read or parsed.
    #[error("{0}")]
    ConfigError(String),

    /// Reading from stdin or writing to stdout failed.
    #[error("I/O failure: {0}")]
    IoError(#[from] std::io::Error),

    /// A built-in command template is malformed.
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    /// JSON serialization of the rendered steps failed.
    #[error("failed to serialize steps to JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DeployError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::ConfigError(_) => exit_codes::USER_ERROR,
            DeployError::IoError(_) => exit_codes::IO_FAILURE,
            DeployError::TemplateError(_) => exit_codes::INTERNAL_ERROR,
            DeployError::JsonError(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for lambdeploy operations.
pub type Result<T> = std::result::Result<T, DeployError>;
