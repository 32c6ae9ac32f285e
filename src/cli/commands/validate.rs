//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Cloak configuration file.

use crate::config::CloakConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `loaded` is the outcome of loading `config_path`, which already
    /// includes environment overrides and validation.
    pub fn execute(&self, config_path: &str, loaded: &Result<CloakConfig>) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        match loaded {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                print!("{}", Self::format_summary(config));
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }

    fn format_summary(config: &CloakConfig) -> String {
        let anon = &config.anonymization;
        let mut out = String::from("Configuration Summary:\n");
        out.push_str(&format!("  Log Level: {}\n", config.application.log_level));
        out.push_str(&format!("  Dry Run: {}\n", config.application.dry_run));
        out.push_str(&format!("  Input: {}\n", anon.input_path.display()));
        out.push_str(&format!("  Output: {}\n", anon.output_path.display()));
        out.push_str(&format!("  Target Columns: {:?}\n", anon.target_columns));
        out.push_str(&format!("  Missing Values: {}\n", anon.missing_value));
        if config.audit.enabled {
            out.push_str(&format!("  Audit Log: {}\n", config.audit.log_path.display()));
        } else {
            out.push_str("  Audit Log: disabled\n");
        }
        if config.logging.local_enabled {
            out.push_str(&format!(
                "  File Logs: {} ({})\n",
                config.logging.local_path, config.logging.local_rotation
            ));
        }
        out
    }
}
