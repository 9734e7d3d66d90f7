//! Core error types for beyondtime-core.
//!
//! Every public operation that can reject its input returns one of these,
//! built on thiserror so the CLI can print them directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for beyondtime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home or config directory could not be resolved/created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Ring start hour outside [0, 24)
    #[error("Invalid hour {hour}: must be within [0, 24)")]
    InvalidHourRange { hour: f64 },

    /// Negative or non-finite duration
    #[error("Invalid duration {duration}: must be a finite, non-negative number of hours")]
    InvalidDuration { duration: f64 },

    /// Slot label not in the fixed 06:00..21:00 set
    #[error("Unknown time slot '{0}'")]
    UnknownSlot(String),

    /// Task id not in the routine catalog
    #[error("Unknown task '{0}'")]
    UnknownTask(String),

    /// Habit id not tracked
    #[error("Unknown habit '{0}'")]
    UnknownHabit(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
