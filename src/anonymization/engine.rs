//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that rewrites the
//! identifier columns of an in-memory [`Dataset`].
//!
//! # Behavior
//!
//! 1. Every target column is resolved against the header (exact,
//!    case-sensitive). If any is missing the run fails and the dataset is
//!    left untouched.
//! 2. Under [`MissingValuePolicy::Fail`] the target cells are scanned for
//!    empty values before anything is rewritten.
//! 3. Each target cell is replaced with [`anonymize_value`] of its text.
//!    Non-target cells, header and row order are never touched.
//!
//! # Examples
//!
//! ```
//! use cloak::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//! use cloak::domain::Dataset;
//!
//! # fn example() -> cloak::domain::Result<()> {
//! let mut dataset = Dataset::new(
//!     vec!["workerid".into(), "hitId".into(), "score".into()],
//!     vec![vec!["alice".into(), "HIT001".into(), "5".into()]],
//! )?;
//!
//! let engine = AnonymizationEngine::new(&AnonymizationConfig::default())?;
//! let stats = engine.anonymize_dataset(&mut dataset)?;
//!
//! assert_eq!(stats.len(), 2);
//! assert_eq!(dataset.records()[0][2], "5");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::config::{validate_target_columns, AnonymizationConfig, MissingValuePolicy};
use crate::anonymization::hasher::{anonymize_value, looks_like_digest};
use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use crate::domain::Dataset;
use serde::{Deserialize, Serialize};

/// Per-column outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name as configured
    pub column: String,

    /// Cells replaced by their digest
    pub hashed: usize,

    /// Empty cells left empty under the `preserve` policy
    pub preserved_empty: usize,

    /// Input cells that already had the shape of a digest
    pub digest_like: usize,
}

impl ColumnStats {
    fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            hashed: 0,
            preserved_empty: 0,
            digest_like: 0,
        }
    }
}

/// Rewrites identifier columns of a dataset
#[derive(Debug, Clone)]
pub struct AnonymizationEngine {
    target_columns: Vec<String>,
    missing_value: MissingValuePolicy,
}

impl AnonymizationEngine {
    /// Create an engine for the configured column set and missing-value policy
    ///
    /// # Errors
    ///
    /// Returns [`CloakError::Configuration`] if the column set is empty, has a
    /// blank name, or lists a column twice.
    pub fn new(config: &AnonymizationConfig) -> Result<Self> {
        Self::with_columns(config.target_columns.clone(), config.missing_value)
    }

    /// Create an engine from an explicit column list
    pub fn with_columns(
        target_columns: Vec<String>,
        missing_value: MissingValuePolicy,
    ) -> Result<Self> {
        validate_target_columns(&target_columns).map_err(CloakError::Configuration)?;

        Ok(Self {
            target_columns,
            missing_value,
        })
    }

    /// Columns this engine rewrites
    pub fn target_columns(&self) -> &[String] {
        &self.target_columns
    }

    /// Policy applied to empty cells
    pub fn missing_value(&self) -> MissingValuePolicy {
        self.missing_value
    }

    /// Replace every target cell with its digest, in place
    ///
    /// Returns one [`ColumnStats`] per target column, in configured order.
    ///
    /// # Errors
    ///
    /// - [`CloakError::MissingColumn`] naming every target column absent from
    ///   the header
    /// - [`CloakError::EmptyValue`] for the first empty target cell (row-major)
    ///   under [`MissingValuePolicy::Fail`]
    ///
    /// On error the dataset is unchanged.
    pub fn anonymize_dataset(&self, dataset: &mut Dataset) -> Result<Vec<ColumnStats>> {
        let targets = self.resolve_columns(dataset)?;

        if self.missing_value == MissingValuePolicy::Fail {
            Self::ensure_no_empty_cells(dataset, &targets)?;
        }

        let mut stats: Vec<ColumnStats> = self
            .target_columns
            .iter()
            .map(|c| ColumnStats::new(c.as_str()))
            .collect();

        for record in dataset.records_mut() {
            for &(stat_idx, col_idx) in &targets {
                let cell = &mut record[col_idx];
                let stat = &mut stats[stat_idx];

                if cell.is_empty() && self.missing_value == MissingValuePolicy::Preserve {
                    stat.preserved_empty += 1;
                    continue;
                }

                if looks_like_digest(cell) {
                    stat.digest_like += 1;
                }

                *cell = anonymize_value(cell);
                stat.hashed += 1;
            }
        }

        for stat in &stats {
            if stat.digest_like > 0 {
                tracing::warn!(
                    column = %stat.column,
                    count = stat.digest_like,
                    "Column already contains digest-shaped values; they were hashed again"
                );
            }
            tracing::debug!(
                column = %stat.column,
                hashed = stat.hashed,
                preserved_empty = stat.preserved_empty,
                "Column anonymized"
            );
        }

        Ok(stats)
    }

    /// Map each target column to its header positions as (stats index, column index)
    fn resolve_columns(&self, dataset: &Dataset) -> Result<Vec<(usize, usize)>> {
        let mut targets = Vec::new();
        let mut missing = Vec::new();

        for (stat_idx, name) in self.target_columns.iter().enumerate() {
            let indices = dataset.column_indices(name);
            if indices.is_empty() {
                missing.push(name.clone());
            }
            targets.extend(indices.into_iter().map(|col_idx| (stat_idx, col_idx)));
        }

        if !missing.is_empty() {
            return Err(CloakError::MissingColumn { columns: missing });
        }

        Ok(targets)
    }

    fn ensure_no_empty_cells(dataset: &Dataset, targets: &[(usize, usize)]) -> Result<()> {
        for (row_idx, record) in dataset.records().iter().enumerate() {
            for &(_, col_idx) in targets {
                if record[col_idx].is_empty() {
                    return Err(CloakError::EmptyValue {
                        column: dataset.headers()[col_idx].clone(),
                        row: row_idx + 1,
                    });
                }
            }
        }
        Ok(())
    }
}
