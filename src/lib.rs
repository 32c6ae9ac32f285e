// Cloak - CSV identifier pseudonymization tool
// Copyright (c) 2026 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - CSV identifier pseudonymization
//!
//! Cloak reads a comma-separated participant file, replaces the values of its
//! identifier columns (by default `workerid` and `hitId`) with the SHA-256
//! digest of each value, and writes the result to a new file. Everything
//! else in the file is carried over unchanged: header, column order, row
//! order and every other cell.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Run coordination (load, transform, save, report)
//! - [`anonymization`] - Digest function, column engine, run summary, audit log
//! - [`adapters`] - CSV file I/O
//! - [`domain`] - Dataset model, errors, result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloak::config::CloakConfig;
//! use cloak::core::run;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // participants.csv -> anonymized_participants.csv, workerid + hitId
//!     let summary = run(CloakConfig::default())?;
//!     println!("{}", summary.completion_message());
//!     Ok(())
//! }
//! ```
//!
//! ## Hashing a single value
//!
//! ```rust
//! use cloak::anonymization::anonymize_value;
//!
//! assert_eq!(
//!     anonymize_value("alice"),
//!     "2bd806c97f0e00af1a1fc3328fa763a9269723c8db8fac4f93af71db186d6e90"
//! );
//! ```
//!
//! The digest is unsalted and deterministic, so the same identifier maps to
//! the same token in every file and every run. That makes records linkable,
//! and it also means short or guessable identifiers can be recovered by
//! hashing candidates.
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`] with [`domain::CloakError`]:
//!
//! ```rust,no_run
//! use cloak::domain::CloakError;
//!
//! match cloak::core::run(cloak::config::CloakConfig::default()) {
//!     Ok(_) => {}
//!     Err(CloakError::MissingColumn { columns }) => eprintln!("missing: {columns:?}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
