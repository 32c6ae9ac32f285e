//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cloak using clap.

pub mod commands;

use crate::config::{load_config, load_config_or_default, CloakConfig, DEFAULT_CONFIG_PATH};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Cloak - pseudonymize identifier columns of CSV files
#[derive(Parser, Debug)]
#[command(name = "cloak")]
#[command(version, about, long_about = None)]
#[command(author = "Cloak Contributors")]
pub struct Cli {
    /// Path to configuration file [default: cloak.toml, if present]
    #[arg(short, long, env = "CLOAK_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLOAK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration file this invocation reads
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)
    }

    /// Load the configuration
    ///
    /// An explicitly named file must exist. Without `--config`, `cloak.toml`
    /// is used if present and built-in defaults otherwise.
    pub fn load_config(&self) -> Result<CloakConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => load_config_or_default(DEFAULT_CONFIG_PATH),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize the identifier columns of the input file
    Run(commands::run::RunArgs),

    /// Print the digest of one or more values (reads stdin lines if none given)
    Hash(commands::hash::HashArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["cloak", "run"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.config_path(), "cloak.toml");
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["cloak", "--config", "custom.toml", "run"]);
        assert_eq!(cli.config_path(), "custom.toml");
    }

    #[test]
    fn test_cli_explicit_missing_config_is_error() {
        let cli = Cli::parse_from(["cloak", "--config", "no-such-cloak.toml", "run"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["cloak", "--log-level", "debug", "run"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_run_overrides() {
        let cli = Cli::parse_from([
            "cloak",
            "run",
            "--input",
            "in.csv",
            "--output",
            "out.csv",
            "--column",
            "workerid",
            "--column",
            "assignment_id",
            "--missing-value",
            "fail",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.input.unwrap().to_str(), Some("in.csv"));
                assert_eq!(args.output.unwrap().to_str(), Some("out.csv"));
                assert_eq!(args.columns, vec!["workerid", "assignment_id"]);
                assert_eq!(args.missing_value.as_deref(), Some("fail"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_column_list() {
        let cli = Cli::parse_from(["cloak", "run", "--column", "workerid,hitId"]);
        match cli.command {
            Commands::Run(args) => assert_eq!(args.columns, vec!["workerid", "hitId"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_hash() {
        let cli = Cli::parse_from(["cloak", "hash", "alice", "bob"]);
        match cli.command {
            Commands::Hash(args) => assert_eq!(args.values, vec!["alice", "bob"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["cloak", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["cloak", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
