//! In-memory tabular dataset
//!
//! A [`Dataset`] is an ordered header plus an ordered list of records. Every
//! record has exactly one field per header column. Column and row order are
//! fixed at construction and never change; only cell values may be rewritten.

use crate::domain::errors::CloakError;
use crate::domain::result::Result;

/// Ordered, rectangular table of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Dataset {
    /// Creates a dataset from a header and its records
    ///
    /// # Errors
    ///
    /// Returns [`CloakError::Validation`] if any record's field count differs
    /// from the header's.
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        if let Some((idx, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != headers.len())
        {
            return Err(CloakError::Validation(format!(
                "Data row {} has {} fields, header has {}",
                idx + 1,
                record.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, records })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in file order
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Indices of every column whose name is exactly `name`
    ///
    /// Header names are matched case-sensitively. A name that appears more
    /// than once in the header yields all of its positions.
    pub fn column_indices(&self, name: &str) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.as_str() == name)
            .map(|(i, _)| i)
            .collect()
    }

    /// Values of column `index`, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(move |r| r[index].as_str())
    }

    /// Mutable access to the records for in-place cell rewrites
    ///
    /// Only cell contents may change; the slice type prevents adding or
    /// removing rows, and callers must not resize individual records.
    pub(crate) fn records_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.records
    }
}
