//! External system integrations for Cloak.
//!
//! - [`csv_io`] - Loading and saving comma-separated participant files
//!
//! # Design Pattern
//!
//! Adapters isolate third-party I/O crates from the rest of the library. The
//! anonymization engine only ever sees a [`crate::domain::Dataset`]; parsing
//! and encoding details stay here.
//!
//! ```rust,no_run
//! use cloak::adapters::csv_io::{read_dataset, write_dataset};
//!
//! # fn example() -> cloak::domain::Result<()> {
//! let dataset = read_dataset("participants.csv")?;
//! write_dataset(&dataset, "copy.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod csv_io;
