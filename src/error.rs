//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while loading configuration,
//! validating time entries and managing stored records.

use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for the payroll engine.
///
/// These errors come from the configuration loader, the entry validator, the
/// record store, and pay arithmetic that leaves the `Decimal` range.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
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

    /// Configuration parsed but contains inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A time entry was rejected by the entry validator.
    #[error("Invalid time entry: {0}")]
    InvalidEntry(#[from] ValidationError),

    /// No stored time entry has the requested id.
    #[error("Time entry not found: {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// An amount left the range a `Decimal` can represent.
    #[error("Pay overflow while computing {component}")]
    PayOverflow {
        /// The amount being computed when the overflow occurred.
        component: &'static str,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
