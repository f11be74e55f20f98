//! Error types for the Settlement Engine.
//!
//! The settlement calculations themselves never fail: malformed input is
//! sanitized to zero before it reaches them. Errors only arise while loading
//! and validating the configuration that drives those calculations.

use thiserror::Error;

/// The main error type for the Settlement Engine.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The income tax bracket table is not an ordered, gapless cover of `[0, ∞)`.
    #[error("Invalid tax bracket table: {message}")]
    InvalidTaxBrackets {
        /// A description of what is wrong with the table.
        message: String,
    },

    /// A configuration value was outside its permitted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
