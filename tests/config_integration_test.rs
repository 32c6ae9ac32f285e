//! Integration tests for configuration loading

use cloak::config::{load_config, load_config_or_default, CloakConfig, MissingValuePolicy};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

// Environment variables are process-wide
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: &[&str] = &[
    "CLOAK_APPLICATION_LOG_LEVEL",
    "CLOAK_APPLICATION_DRY_RUN",
    "CLOAK_ANONYMIZATION_INPUT_PATH",
    "CLOAK_ANONYMIZATION_OUTPUT_PATH",
    "CLOAK_ANONYMIZATION_TARGET_COLUMNS",
    "CLOAK_ANONYMIZATION_MISSING_VALUE",
    "CLOAK_AUDIT_ENABLED",
    "CLOAK_AUDIT_LOG_PATH",
    "CLOAK_AUDIT_JSON_FORMAT",
    "CLOAK_LOGGING_LOCAL_ENABLED",
    "CLOAK_LOGGING_LOCAL_PATH",
    "CLOAK_LOGGING_LOCAL_ROTATION",
    "CLOAK_TEST_DATA_DIR",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("cloak.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_load_full_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[application]
log_level = "debug"
dry_run = true

[anonymization]
input_path = "data/in.csv"
output_path = "data/out.csv"
target_columns = ["workerid", "hitId", "assignment_id"]
missing_value = "fail"

[audit]
enabled = true
log_path = "audit/runs.log"
json_format = false

[logging]
local_enabled = true
local_path = "./var/logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(&path).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.anonymization.input_path, PathBuf::from("data/in.csv"));
    assert_eq!(config.anonymization.output_path, PathBuf::from("data/out.csv"));
    assert_eq!(
        config.anonymization.target_columns,
        vec!["workerid", "hitId", "assignment_id"]
    );
    assert_eq!(config.anonymization.missing_value, MissingValuePolicy::Fail);
    assert!(config.audit.enabled);
    assert!(!config.audit.json_format);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_partial_config_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[anonymization]\ninput_path = \"other.csv\"\n");

    let config = load_config(&path).expect("Failed to load config");

    assert_eq!(config.anonymization.input_path, PathBuf::from("other.csv"));
    assert_eq!(
        config.anonymization.output_path,
        PathBuf::from("anonymized_participants.csv")
    );
    assert_eq!(config.anonymization.target_columns, vec!["workerid", "hitId"]);
    assert_eq!(config.anonymization.missing_value, MissingValuePolicy::Preserve);
    assert_eq!(config.application.log_level, "info");
    assert!(!config.audit.enabled);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();

    let err = load_config(dir.path().join("nope.toml")).unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_missing_default_file_falls_back_to_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();

    let config = load_config_or_default(dir.path().join("cloak.toml")).unwrap();

    let defaults = CloakConfig::default();
    assert_eq!(config.anonymization.input_path, defaults.anonymization.input_path);
    assert_eq!(
        config.anonymization.target_columns,
        defaults.anonymization.target_columns
    );
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    std::env::set_var("CLOAK_TEST_DATA_DIR", "/srv/study");
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[anonymization]\n\
         input_path = \"${CLOAK_TEST_DATA_DIR}/participants.csv\"\n\
         output_path = \"${CLOAK_TEST_DATA_DIR}/anonymized.csv\"\n",
    );

    let config = load_config(&path);
    clear_env();
    let config = config.expect("Failed to load config");

    assert_eq!(
        config.anonymization.input_path,
        PathBuf::from("/srv/study/participants.csv")
    );
    assert_eq!(
        config.anonymization.output_path,
        PathBuf::from("/srv/study/anonymized.csv")
    );
}

#[test]
fn test_env_var_substitution_missing_variable() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[anonymization]\ninput_path = \"${CLOAK_TEST_DATA_DIR}/participants.csv\"\n",
    );

    let err = load_config(&path).unwrap_err();

    assert!(err.to_string().contains("CLOAK_TEST_DATA_DIR"));
}

#[test]
fn test_env_overrides_take_precedence_over_file() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    std::env::set_var("CLOAK_ANONYMIZATION_TARGET_COLUMNS", "workerid, assignment_id");
    std::env::set_var("CLOAK_ANONYMIZATION_MISSING_VALUE", "hash");
    std::env::set_var("CLOAK_AUDIT_ENABLED", "true");
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[anonymization]\ntarget_columns = [\"hitId\"]\nmissing_value = \"fail\"\n",
    );

    let config = load_config(&path);
    clear_env();
    let config = config.expect("Failed to load config");

    assert_eq!(
        config.anonymization.target_columns,
        vec!["workerid", "assignment_id"]
    );
    assert_eq!(config.anonymization.missing_value, MissingValuePolicy::Hash);
    assert!(config.audit.enabled);
}

#[test]
fn test_invalid_missing_value_override() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    std::env::set_var("CLOAK_ANONYMIZATION_MISSING_VALUE", "drop");
    let dir = TempDir::new().unwrap();

    let result = load_config_or_default(dir.path().join("cloak.toml"));
    clear_env();

    let err = result.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("drop"));
}

#[test]
fn test_validation_rejects_empty_target_columns() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[anonymization]\ntarget_columns = []\n");

    let err = load_config(&path).unwrap_err();

    assert!(err.to_string().contains("Configuration validation failed"));
}

#[test]
fn test_validation_rejects_duplicate_target_columns() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[anonymization]\ntarget_columns = [\"workerid\", \"workerid\"]\n",
    );

    assert!(load_config(&path).is_err());
}

#[test]
fn test_validation_rejects_unknown_rotation() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlocal_rotation = \"weekly\"\n");

    let err = load_config(&path).unwrap_err();

    assert!(err.to_string().contains("weekly"));
}

#[test]
fn test_malformed_toml() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[anonymization\ninput_path = 3\n");

    let err = load_config(&path).unwrap_err();

    assert!(err.is_configuration());
}

#[test]
fn test_unknown_missing_value_in_file() {
    let _guard = ENV_MUTEX.lock().unwrap();
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[anonymization]\nmissing_value = \"skip\"\n");

    assert!(load_config(&path).is_err());
}
