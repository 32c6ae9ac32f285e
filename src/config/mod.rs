//! Configuration management for Cloak.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Cloak reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `CLOAK_<SECTION>_<KEY>` environment overrides
//! - Validation before anything touches the filesystem
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run flag
//! - [`AnonymizationConfig`] - Input/output paths, target columns, missing-value policy
//! - [`AuditConfig`] - Append-only run audit log
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! input_path = "participants.csv"
//! output_path = "anonymized_participants.csv"
//! target_columns = ["workerid", "hitId"]
//! missing_value = "preserve"
//!
//! [audit]
//! enabled = true
//! log_path = "${CLOAK_AUDIT_DIR}/anonymization.log"
//! ```
//!
//! # Validation
//!
//! ```rust,no_run
//! use cloak::config::load_config;
//!
//! match load_config("cloak.toml") {
//!     Ok(config) => println!("Hashing {:?}", config.anonymization.target_columns),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::anonymization::config::{AnonymizationConfig, AuditConfig, MissingValuePolicy};
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, CloakConfig, LoggingConfig};

/// Configuration file looked up when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "cloak.toml";
