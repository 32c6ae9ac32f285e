//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Local JSON file logging with rotation
//!
//! Identifier values, plaintext or hashed, are never logged.
//!
//! # Example
//!
//! ```no_run
//! use cloak::logging::init_logging;
//! use cloak::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an anonymization run
///
/// # Example
///
/// ```no_run
/// use cloak::log_run_start;
///
/// log_run_start!("participants.csv", "anonymized_participants.csv");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($input:expr, $output:expr) => {
        tracing::info!(
            input_path = %$input,
            output_path = %$output,
            "Starting anonymization run"
        );
    };
}

/// Log the completion of an anonymization run
///
/// # Example
///
/// ```no_run
/// use cloak::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(2, 4, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($rows:expr, $hashed:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            cells_hashed = $hashed,
            duration_ms = $duration.as_millis() as u64,
            "Anonymization run completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cloak::log_error_with_context;
/// use cloak::domain::CloakError;
///
/// let error = CloakError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
