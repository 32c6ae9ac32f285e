//! CSV file adapter
//!
//! Reads a whole CSV file into a [`crate::domain::Dataset`] and writes one
//! back out with the same header and field order and no index column.

pub mod reader;
pub mod writer;

pub use reader::{read_dataset, read_dataset_from_reader};
pub use writer::{write_dataset, write_dataset_to_writer};
