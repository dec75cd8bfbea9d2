//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { year: 1999, month: 5 };
/// assert_eq!(error.to_string(), "Invalid payroll month: year 1999, month 5");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested year/month is outside the supported range.
    ///
    /// Years before 2000 and months outside 1-12 are rejected before
    /// any read or write is performed.
    #[error("Invalid payroll month: year {year}, month {month}")]
    InvalidMonth {
        /// The rejected year.
        year: i32,
        /// The rejected month.
        month: u32,
    },

    /// A read or write against the underlying store failed.
    ///
    /// Storage failures are propagated to the caller unchanged; the
    /// engine never retries internally.
    #[error("Storage failure during {operation}: {message}")]
    Storage {
        /// The storage operation that failed (e.g. "insert payroll batch").
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// Rates configuration file was not found at the specified path.
    #[error("Rates configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rates configuration file could not be parsed.
    #[error("Failed to parse rates configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates a storage error for the given operation.
    pub fn storage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Storage {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
