//! Anonymization module for Cloak
//!
//! This module replaces identifier columns with one-way digests.
//!
//! # Architecture
//!
//! - **Hasher**: SHA-256 digest of a single value ([`hasher::anonymize_value`])
//! - **Engine**: applies the hasher to the target columns of a dataset
//! - **Report**: per-run summary with per-column counts
//! - **Audit**: append-only run log that never contains identifier values
//!
//! # Usage
//!
//! ```rust,no_run
//! use cloak::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//! use cloak::adapters::csv_io::read_dataset;
//!
//! # fn example() -> cloak::domain::Result<()> {
//! let config = AnonymizationConfig::default();
//! let engine = AnonymizationEngine::new(&config)?;
//! let mut dataset = read_dataset(&config.input_path)?;
//! engine.anonymize_dataset(&mut dataset)?;
//! # Ok(())
//! # }
//! ```
//!
//! The digest is unsalted: equal identifiers map to equal tokens across files
//! and runs, which also means a low-entropy identifier can be recovered by
//! hashing candidate values.

pub mod audit;
pub mod config;
pub mod engine;
pub mod hasher;
pub mod report;

// Re-export main types
pub use config::{AnonymizationConfig, MissingValuePolicy};
pub use engine::{AnonymizationEngine, ColumnStats};
pub use hasher::anonymize_value;
pub use report::RunSummary;
