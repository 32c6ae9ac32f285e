//! Core business logic for Cloak.
//!
//! # Run Workflow
//!
//! 1. **Load**: read the whole input CSV into memory
//! 2. **Transform**: replace each target column with its digest
//! 3. **Save**: write the table to the output path (skipped on dry run)
//! 4. **Report**: build a [`crate::anonymization::RunSummary`] and append it
//!    to the audit log if enabled
//!
//! # Example
//!
//! ```rust,no_run
//! use cloak::config::load_config;
//! use cloak::core::Coordinator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cloak.toml")?;
//! let summary = Coordinator::new(config)?.execute()?;
//! println!("{}", summary.completion_message());
//! # Ok(())
//! # }
//! ```

pub mod coordinator;

pub use coordinator::{run, Coordinator};
