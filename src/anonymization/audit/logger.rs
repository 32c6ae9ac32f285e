//! Audit logger for anonymization runs
//!
//! One line is appended per run. Entries carry paths, counts and timing but
//! never identifier values.

use crate::anonymization::report::RunSummary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    run_id: String,
    input_path: String,
    output_path: String,
    rows: usize,
    columns: Vec<AuditColumn<'a>>,
    dry_run: bool,
    duration_ms: u64,
}

/// Per-column counts
#[derive(Debug, Serialize)]
struct AuditColumn<'a> {
    name: &'a str,
    hashed: usize,
    preserved_empty: usize,
}

/// Audit logger for anonymization runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Append a record for a finished run
    pub fn log_run(&self, summary: &RunSummary) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: summary.started_at.to_rfc3339(),
            run_id: summary.run_id.to_string(),
            input_path: summary.input_path.display().to_string(),
            output_path: summary.output_path.display().to_string(),
            rows: summary.rows,
            columns: summary
                .column_stats
                .iter()
                .map(|s| AuditColumn {
                    name: &s.column,
                    hashed: s.hashed,
                    preserved_empty: s.preserved_empty,
                })
                .collect(),
            dry_run: summary.dry_run,
            duration_ms: summary.duration_ms,
        };

        self.write_entry(&entry)
    }

    /// Path of the audit log file
    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }

    fn write_entry(&self, entry: &AuditLogEntry<'_>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let columns: Vec<&str> = entry.columns.iter().map(|c| c.name).collect();
            writeln!(
                file,
                "[{}] Run: {} | Input: {} | Output: {} | Rows: {} | Columns: {} | Dry run: {} | Time: {}ms",
                entry.timestamp,
                entry.run_id,
                entry.input_path,
                entry.output_path,
                entry.rows,
                columns.join(","),
                entry.dry_run,
                entry.duration_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
