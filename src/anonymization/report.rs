//! Run summary
//!
//! A [`RunSummary`] records what a run did: which file it read, which it
//! wrote, how many rows and which columns it rewrote. It never holds
//! identifier values, plaintext or hashed.

use crate::anonymization::engine::ColumnStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Outcome of one anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Unique id of this run, shared by its log lines and audit record
    pub run_id: Uuid,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Input CSV path
    pub input_path: PathBuf,

    /// Output CSV path (not written when `dry_run` is set)
    pub output_path: PathBuf,

    /// Data rows processed
    pub rows: usize,

    /// Columns in the dataset
    pub columns: usize,

    /// Per target column statistics
    pub column_stats: Vec<ColumnStats>,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,

    /// True if the output file was not written
    pub dry_run: bool,
}

impl RunSummary {
    /// Create a summary for a run that is about to start
    pub fn new(input_path: PathBuf, output_path: PathBuf, dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            input_path,
            output_path,
            rows: 0,
            columns: 0,
            column_stats: Vec::new(),
            duration_ms: 0,
            dry_run,
        }
    }

    /// Total cells replaced by a digest
    pub fn total_hashed(&self) -> usize {
        self.column_stats.iter().map(|s| s.hashed).sum()
    }

    /// Total empty cells left in place
    pub fn total_preserved_empty(&self) -> usize {
        self.column_stats.iter().map(|s| s.preserved_empty).sum()
    }

    /// Human-readable completion notice naming the file actually written
    pub fn completion_message(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run completed; '{}' was not written.",
                self.output_path.display()
            )
        } else {
            format!(
                "Anonymization completed and saved to '{}'.",
                self.output_path.display()
            )
        }
    }

    /// Multi-line report for the console
    pub fn format_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Run ID:  {}\n", self.run_id));
        out.push_str(&format!("Input:   {}\n", self.input_path.display()));
        out.push_str(&format!("Output:  {}\n", self.output_path.display()));
        out.push_str(&format!(
            "Rows:    {} ({} columns)\n",
            self.rows, self.columns
        ));
        for stat in &self.column_stats {
            out.push_str(&format!(
                "  {:<20} hashed {:>8}  empty kept {:>6}\n",
                stat.column, stat.hashed, stat.preserved_empty
            ));
        }
        out.push_str(&format!("Time:    {} ms\n", self.duration_ms));
        out
    }
}
