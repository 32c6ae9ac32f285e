// Cloak - CSV identifier pseudonymization tool
// Copyright (c) 2026 Cloak Contributors
// Licensed under the MIT License

use clap::Parser;
use cloak::cli::{Cli, Commands};
use cloak::config::{CloakConfig, LoggingConfig};
use cloak::domain::{CloakError, Result};
use cloak::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration decides the log level and file logging, so load it first.
    // Errors are reported by the command once logging is up.
    let config = cli.load_config();

    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Cloak - CSV identifier pseudonymization"
    );

    let exit_code = match execute_command(&cli, config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            e.downcast_ref::<CloakError>()
                .map_or(5, CloakError::exit_code)
        }
    };

    // Flush file logs before exiting
    drop(_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: Result<CloakConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => match config {
            Ok(config) => args.execute(config),
            Err(e) => {
                tracing::error!(error = %e, config_path = %cli.config_path(), "Failed to load configuration");
                eprintln!("Error: {e}");
                Ok(e.exit_code())
            }
        },
        Commands::Hash(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(cli.config_path(), &config),
        Commands::Init(args) => args.execute(),
    }
}
