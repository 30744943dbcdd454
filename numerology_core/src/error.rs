//! Error types for the numerology_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for numerology_core operations
///
/// The calculation engine itself never fails on a bad date (it returns `None`);
/// these variants cover the layers that touch files or surface the date
/// rejection to a host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Birth date is malformed or not a real calendar date
    #[error("Invalid birth date {0:?}: expected a real calendar date as YYYY-MM-DD")]
    InvalidDate(String),
}
