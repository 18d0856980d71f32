/*!
 * Error types for the evidence-align application.
 *
 * The alignment engine itself never fails; these types cover loading
 * inputs, validating configuration and writing results, using the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading alignment inputs
#[derive(Error, Debug)]
pub enum InputError {
    /// The document text could not be read
    #[error("Failed to read document text: {0}")]
    TextUnreadable(String),

    /// The excerpts file is not valid JSON in a supported shape
    #[error("Malformed excerpts file: {0}")]
    MalformedExcerpts(String),
}

/// Errors that can occur when validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The configuration file could not be parsed
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading inputs
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error in configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
