//! CSV saving
//!
//! Output uses `,` as delimiter, `\n` as record terminator and quotes a field
//! only when it has to. The header row is always written, in dataset order,
//! and no row index column is added.
//!
//! Files are written to a temporary sibling first and renamed into place, so a
//! failed run never leaves a truncated output file behind. A replaced file
//! keeps its permissions; a new file gets the same mode a plain create would
//! (`0o666` less the umask on Unix).

use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use crate::domain::Dataset;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Writes `dataset` to `path`, replacing any existing file atomically
///
/// # Errors
///
/// Returns [`CloakError::Io`] if the destination directory is not writable or
/// the final rename fails.
pub fn write_dataset(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = create_temp_file(dir).map_err(|e| {
        CloakError::Io(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })?;

    write_dataset_to_writer(dataset, temp.as_file_mut())?;

    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| {
                CloakError::Io(format!(
                    "Failed to copy permissions of {}: {}",
                    path.display(),
                    e
                ))
            })?;
    }

    temp.persist(path).map_err(|e| {
        CloakError::Io(format!(
            "Failed to write output file {}: {}",
            path.display(),
            e.error
        ))
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = dataset.len(),
        "Wrote dataset"
    );

    Ok(())
}

fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".cloak-");

    // tempfile defaults to 0o600; the requested mode is still masked by the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}

/// Writes `dataset` as CSV to any writer
pub fn write_dataset_to_writer<W: Write>(dataset: &Dataset, wtr: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(wtr);

    writer.write_record(dataset.headers())?;
    for record in dataset.records() {
        writer.write_record(record)?;
    }
    writer.flush()?;

    Ok(())
}
