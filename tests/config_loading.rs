//! Integration tests for configuration file loading
//!
//! Exercises the three loading phases through real files: read,
//! parse, validate. Each failure mode must name the offending path.

use std::io::Write;
use tagsieve::config::Config;
use tagsieve::error::AppError;
use tempfile::NamedTempFile;

/// Write the given TOML to a fresh temp file
fn create_temp_config(toml_content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(toml_content.as_bytes())
        .expect("temp file should accept writes");
    file.flush().expect("temp file should flush");
    file
}

#[test]
fn loads_a_complete_config() {
    let file = create_temp_config(
        r#"
[selection]
exclude_tags = ["quarantined"]
browser = "firefox"

[observability]
log_level = "debug"
"#,
    );

    let config = Config::from_file(file.path()).expect("should load config");
    assert_eq!(config.selection.exclude_tags, ["quarantined"]);
    assert_eq!(config.selection.browser.as_deref(), Some("firefox"));
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn empty_file_loads_with_defaults() {
    let file = create_temp_config("");
    let config = Config::from_file(file.path()).expect("should load empty config");
    assert!(config.selection.exclude_tags.is_empty());
    assert!(config.selection.browser.is_none());
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn missing_file_reports_read_error_with_path() {
    let err = Config::from_file("definitely-missing-tagsieve.toml")
        .expect_err("missing file should fail");

    assert!(matches!(err, AppError::ConfigFileRead { .. }));
    assert!(
        err.to_string()
            .contains("definitely-missing-tagsieve.toml")
    );
}

#[test]
fn malformed_toml_reports_parse_error_with_path() {
    let file = create_temp_config("[selection\nexclude_tags = [");
    let err = Config::from_file(file.path()).expect_err("malformed TOML should fail");

    assert!(matches!(err, AppError::ConfigParseFailed { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn invalid_values_report_validation_error_with_reason() {
    let file = create_temp_config("[selection]\nexclude_tags = [\"\"]\n");
    let err = Config::from_file(file.path()).expect_err("blank entry should fail validation");

    match err {
        AppError::ConfigValidationFailed { reason, .. } => {
            assert!(reason.contains("exclude_tags entry 0"));
        }
        other => panic!("expected validation failure, got: {other}"),
    }
}

#[test]
fn blank_browser_fails_validation() {
    let file = create_temp_config("[selection]\nbrowser = \"\"\n");
    let err = Config::from_file(file.path()).expect_err("blank browser should fail");
    assert!(matches!(err, AppError::ConfigValidationFailed { .. }));
}

#[test]
fn unknown_log_level_still_loads() {
    // Level strings are handed to the tracing filter as-is; loading
    // does not second-guess them
    let file = create_temp_config("[observability]\nlog_level = \"verbose\"\n");
    let config = Config::from_file(file.path()).expect("should load config");
    assert_eq!(config.observability.log_level, "verbose");
}
