//! Domain models and types for Cloak.
//!
//! The domain layer provides:
//! - **The in-memory table** ([`Dataset`]) that a run loads, rewrites and saves
//! - **Error types** ([`CloakError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T>`]:
//!
//! ```rust,no_run
//! use cloak::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let dataset = cloak::adapters::csv_io::read_dataset("participants.csv")?;
//!     println!("{} rows", dataset.len());
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use errors::CloakError;
pub use result::Result;
