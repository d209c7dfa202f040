//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading settings or accepting
//! input at the boundary. The calculation rules themselves never fail.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
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

    /// A time of day was out of range or not in `HH:MM` form.
    #[error("Invalid time of day '{value}': {message}")]
    InvalidTimeOfDay {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// Department name was not found in the configuration.
    #[error("Department not found: {name}")]
    DepartmentNotFound {
        /// The department that was not found.
        name: String,
    },

    /// Designation was not found in the configuration.
    #[error("Designation not found: {name}")]
    DesignationNotFound {
        /// The designation that was not found.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
