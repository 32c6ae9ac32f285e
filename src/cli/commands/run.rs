//! Run command implementation
//!
//! This module implements the `run` command: load the input file, hash the
//! identifier columns and write the output file.

use crate::config::loader::split_list;
use crate::config::{CloakConfig, MissingValuePolicy};
use crate::core::Coordinator;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the input CSV path
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Override the output CSV path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column to anonymize; repeat or comma-separate (replaces the configured set)
    #[arg(long = "column", value_name = "NAME", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Empty-cell policy (preserve, fail or hash)
    #[arg(long, value_name = "POLICY")]
    pub missing_value: Option<String>,

    /// Hash and report, but don't write the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a per-column summary before the completion notice
    #[arg(long)]
    pub summary: bool,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, mut config: CloakConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        if let Err(msg) = self.apply_overrides(&mut config) {
            tracing::error!(error = %msg, "Invalid command-line override");
            eprintln!("Error: {msg}");
            return Ok(2); // Configuration error exit code
        }

        let coordinator = match Coordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Invalid configuration");
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = coordinator.execute()?;

        if self.summary {
            print!("{}", summary.format_report());
        }
        println!("{}", summary.completion_message());

        Ok(0)
    }

    /// Apply CLI overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut CloakConfig) -> Result<(), String> {
        if let Some(ref input) = self.input {
            tracing::info!(input = %input.display(), "Overriding input path from CLI");
            config.anonymization.input_path = input.clone();
        }

        if let Some(ref output) = self.output {
            tracing::info!(output = %output.display(), "Overriding output path from CLI");
            config.anonymization.output_path = output.clone();
        }

        if !self.columns.is_empty() {
            let columns: Vec<String> = self.columns.iter().flat_map(|c| split_list(c)).collect();
            tracing::info!(columns = ?columns, "Overriding target columns from CLI");
            config.anonymization.target_columns = columns;
        }

        if let Some(ref policy) = self.missing_value {
            config.anonymization.missing_value = policy.parse::<MissingValuePolicy>()?;
            tracing::info!(
                missing_value = %config.anonymization.missing_value,
                "Overriding missing-value policy from CLI"
            );
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        Ok(())
    }
}
