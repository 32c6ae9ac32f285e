//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CloakConfig;
use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CloakConfig
/// 4. Applies environment variable overrides (CLOAK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cloak::config::loader::load_config;
///
/// let config = load_config("cloak.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CloakError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CloakError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: CloakConfig = toml::from_str(&contents)
        .map_err(|e| CloakError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads `path` if it exists, otherwise starts from built-in defaults
///
/// Environment overrides and validation apply in both cases. Used when the
/// operator did not name a configuration file explicitly.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            path = %path.display(),
            "No configuration file found, using built-in defaults"
        );
        finish(CloakConfig::default())
    }
}

fn finish(mut config: CloakConfig) -> Result<CloakConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CloakError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Every missing variable is reported in a
/// single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CloakError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CLOAK_* prefix
///
/// Environment variables follow the pattern: CLOAK_<SECTION>_<KEY>
/// For example: CLOAK_ANONYMIZATION_INPUT_PATH, CLOAK_AUDIT_ENABLED
fn apply_env_overrides(config: &mut CloakConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CLOAK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("CLOAK_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("CLOAK_APPLICATION_DRY_RUN", &val)?;
    }

    // Anonymization overrides
    if let Ok(val) = std::env::var("CLOAK_ANONYMIZATION_INPUT_PATH") {
        config.anonymization.input_path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("CLOAK_ANONYMIZATION_OUTPUT_PATH") {
        config.anonymization.output_path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("CLOAK_ANONYMIZATION_TARGET_COLUMNS") {
        config.anonymization.target_columns = split_list(&val);
    }
    if let Ok(val) = std::env::var("CLOAK_ANONYMIZATION_MISSING_VALUE") {
        config.anonymization.missing_value = val.parse().map_err(|e: String| {
            CloakError::Configuration(format!("CLOAK_ANONYMIZATION_MISSING_VALUE: {e}"))
        })?;
    }

    // Audit overrides
    if let Ok(val) = std::env::var("CLOAK_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("CLOAK_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("CLOAK_AUDIT_LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("CLOAK_AUDIT_JSON_FORMAT") {
        config.audit.json_format = parse_bool("CLOAK_AUDIT_JSON_FORMAT", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("CLOAK_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Parses a boolean override; only `true` and `false` are accepted
fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(CloakError::Configuration(format!(
            "{var}: invalid boolean '{other}'. Must be 'true' or 'false'"
        ))),
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
