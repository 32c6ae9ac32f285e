//! CSV loading
//!
//! The first row is the header. Every data row must have exactly as many
//! fields as the header; a ragged row is a parse error. Cell text is kept
//! verbatim (no trimming, no type inference) so that columns which are not
//! anonymized can be written back byte-for-byte.

use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use crate::domain::Dataset;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads the whole CSV file at `path` into memory
///
/// # Errors
///
/// - [`CloakError::Io`] if the file cannot be opened or read
/// - [`CloakError::Csv`] if a row is malformed or not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use cloak::adapters::csv_io::read_dataset;
///
/// let dataset = read_dataset("participants.csv").expect("Failed to read input");
/// println!("Loaded {} rows", dataset.len());
/// ```
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        CloakError::Io(format!("Failed to open input file {}: {}", path.display(), e))
    })?;

    let dataset = read_dataset_from_reader(file).map_err(|e| match e {
        CloakError::Csv(msg) => CloakError::Csv(format!("{}: {}", path.display(), msg)),
        CloakError::Io(msg) => CloakError::Io(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.width(),
        "Loaded dataset"
    );

    Ok(dataset)
}

/// Loads CSV data from any reader
pub fn read_dataset_from_reader<R: Read>(rdr: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(rdr);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Dataset::new(headers, records)
}
