//! Error types for the daily office engine.
//!
//! Three families, matching the three kinds of failure the engine can see:
//!
//! - [`CalendarError`]: date arithmetic past the limits of the date type. Only
//!   years at the very edge of `NaiveDate` can raise it.
//! - [`LectionaryError`]: unknown plans and table load failures. Missing table
//!   entries are NOT errors; they resolve to empty readings.
//! - [`ConfigError`]: invalid or unreadable configuration.

use thiserror::Error;

/// Errors raised by the pure calendar computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Date arithmetic left the range `NaiveDate` can represent.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

/// Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors raised by the lectionary resolver.
///
/// `Clone` because a single failed table load is handed to every caller that
/// was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LectionaryError {
    /// Plan identifier is not one of the shipped plans.
    #[error("Unknown reading plan: '{0}'")]
    UnknownPlan(String),

    /// The plan table could not be fetched.
    #[error("Failed to load table for plan '{plan}': {message}")]
    TableLoad {
        /// Plan identifier
        plan: String,
        /// Underlying failure
        message: String,
    },

    /// The plan table was fetched but is not in the expected shape.
    #[error("Failed to parse table for plan '{plan}': {message}")]
    TableParse {
        /// Plan identifier
        plan: String,
        /// Underlying failure
        message: String,
    },

    /// The date could not be placed in the liturgical calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result type for lectionary operations.
pub type LectionaryResult<T> = Result<T, LectionaryError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field failed validation.
    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid {
        /// Dotted field path
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {message}")]
    Read {
        /// File path
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// The configuration source could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl ConfigError {
    /// Create an [`ConfigError::Invalid`] for a named field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
