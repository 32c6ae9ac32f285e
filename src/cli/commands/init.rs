//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cloak.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cloak configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your paths and columns", self.output);
                println!("  2. Validate configuration: cloak validate-config");
                println!("  3. Run: cloak run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every option at its default
    pub fn generate_config() -> String {
        r#"# Cloak Configuration File
# Replaces identifier columns of a CSV file with their SHA-256 digest.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"
# Hash and report without writing the output file
dry_run = false

[anonymization]
input_path = "participants.csv"
output_path = "anonymized_participants.csv"
# Columns to replace; names are case-sensitive
target_columns = ["workerid", "hitId"]
# Empty cells in target columns: preserve, fail or hash
missing_value = "preserve"

[audit]
# Append one record per run (paths and counts only, never identifier values)
enabled = false
log_path = "./audit/anonymization.log"
json_format = true

[logging]
# JSON file logs in addition to console output
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#
        .to_string()
    }
}
