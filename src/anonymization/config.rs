//! Anonymization configuration

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do with an empty cell in a target column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Leave the cell empty and count it as preserved
    #[default]
    Preserve,
    /// Abort the run on the first empty cell
    Fail,
    /// Hash the empty string like any other value
    Hash,
}

impl MissingValuePolicy {
    /// Accepted spellings, for error messages
    pub const VARIANTS: [&'static str; 3] = ["preserve", "fail", "hash"];
}

impl fmt::Display for MissingValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Preserve => "preserve",
            Self::Fail => "fail",
            Self::Hash => "hash",
        };
        f.write_str(s)
    }
}

impl FromStr for MissingValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "fail" => Ok(Self::Fail),
            "hash" => Ok(Self::Hash),
            other => Err(format!(
                "Invalid missing_value policy '{}'. Must be one of: {}",
                other,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// Which file to read, which to write, and which columns to hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Input CSV path
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Output CSV path
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Identifier columns to replace with their digest
    #[serde(default = "default_target_columns")]
    pub target_columns: Vec<String>,

    /// Handling of empty identifier cells
    #[serde(default)]
    pub missing_value: MissingValuePolicy,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("participants.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("anonymized_participants.csv")
}

fn default_target_columns() -> Vec<String> {
    vec!["workerid".to_string(), "hitId".to_string()]
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            target_columns: default_target_columns(),
            missing_value: MissingValuePolicy::default(),
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_path.as_os_str().is_empty() {
            return Err("anonymization.input_path cannot be empty".to_string());
        }
        if self.output_path.as_os_str().is_empty() {
            return Err("anonymization.output_path cannot be empty".to_string());
        }
        if self.input_path == self.output_path {
            return Err(format!(
                "anonymization.output_path must differ from input_path ({})",
                self.input_path.display()
            ));
        }

        validate_target_columns(&self.target_columns)
    }
}

/// Checks that a column set is non-empty, has no blank names and no duplicates
pub fn validate_target_columns(columns: &[String]) -> Result<(), String> {
    if columns.is_empty() {
        return Err("anonymization.target_columns cannot be empty".to_string());
    }

    let mut seen = HashSet::new();
    for column in columns {
        if column.trim().is_empty() {
            return Err("anonymization.target_columns contains a blank column name".to_string());
        }
        if !seen.insert(column.as_str()) {
            return Err(format!(
                "anonymization.target_columns lists '{column}' more than once"
            ));
        }
    }

    Ok(())
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}
