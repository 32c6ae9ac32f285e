//! Domain error types
//!
//! This module defines the error hierarchy for Cloak. All errors are
//! domain-specific and don't expose third-party types to callers.

use thiserror::Error;

/// Main Cloak error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors (missing file, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV input or failure while encoding CSV output
    #[error("CSV error: {0}")]
    Csv(String),

    /// One or more target columns are absent from the input header
    #[error("Missing column(s) in input header: {}", .columns.join(", "))]
    MissingColumn { columns: Vec<String> },

    /// An empty identifier cell was found under the `fail` missing-value policy
    #[error("Empty value in column '{column}' at data row {row}")]
    EmptyValue { column: String, row: usize },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CloakError {
    /// Whether this error originates from configuration rather than data
    pub fn is_configuration(&self) -> bool {
        matches!(self, CloakError::Configuration(_) | CloakError::Validation(_))
    }

    /// Process exit code for this error: 2 for configuration, 5 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration() {
            2
        } else {
            5
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for CloakError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => CloakError::Io(err.to_string()),
            _ => CloakError::Csv(err.to_string()),
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}
