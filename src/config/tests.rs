//! Tests for config functionality.

use crate::config::types::{default_checks, default_patterns};
use crate::config::{CONFIG_FILE_NAME, Config, MalformedHunkPolicy, ScanMode, ScanOptions};
use crate::error::CheckError;
use crate::pattern::PatternSpec;
use std::str::FromStr;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.patterns[0].name.as_deref(), Some("PTWS"));
    assert_eq!(config.patterns[0].description, "Trailing whitespace");
    assert!(config.ignores.is_empty());
    assert_eq!(config.checks, vec![".*".to_string()]);
    assert_eq!(config.on_malformed_hunk, MalformedHunkPolicy::Abort);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
ignores:
  - "vendor/.*"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.ignores, vec!["vendor/.*".to_string()]);
    // Unspecified values should use defaults
    assert_eq!(config.patterns, default_patterns());
    assert_eq!(config.checks, default_checks());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
patterns:
  - pattern: '[ \t]+$'
    name: PTWS
    description: Trailing whitespace
  - pattern: 'TODO'
    description: Unresolved TODO
ignores:
  - 'vendor/.*'
checks:
  - '.*\.py'
  - '.*\.rs'
on_malformed_hunk: skip_file
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.patterns,
        vec![
            PatternSpec::new(r"[ \t]+$", Some("PTWS"), "Trailing whitespace"),
            PatternSpec::new("TODO", None, "Unresolved TODO"),
        ]
    );
    assert_eq!(config.ignores, vec!["vendor/.*"]);
    assert_eq!(config.checks, vec![r".*\.py", r".*\.rs"]);
    assert_eq!(config.on_malformed_hunk, MalformedHunkPolicy::SkipFile);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
checks: ['src/']
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.checks, vec!["src/"]);
}

#[test]
fn test_empty_check_list_is_allowed() {
    let config = Config::from_yaml("checks: []").unwrap();
    assert!(config.checks.is_empty());
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("patterns: [unterminated").unwrap_err();
    assert!(matches!(err, CheckError::Config(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_invalid_policy_is_config_error() {
    let err = Config::from_yaml("on_malformed_hunk: retry").unwrap_err();
    assert!(matches!(err, CheckError::Config(_)));
}

#[test]
fn test_empty_pattern_rejected() {
    let yaml = r#"
patterns:
  - pattern: ''
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("patterns[0] has an empty pattern"));
}

#[test]
fn test_empty_name_rejected() {
    let yaml = r#"
patterns:
  - pattern: 'x'
  - pattern: 'y'
    name: ''
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("patterns[1] has an empty name"));
    assert!(err.to_string().contains("P001"));
}

#[test]
fn test_empty_check_entry_rejected() {
    let err = Config::from_yaml("checks: ['']").unwrap_err();
    assert!(err.to_string().contains("checks entries must be non-empty"));
}

#[test]
fn test_yaml_roundtrip() {
    let mut config = Config::default();
    config.ignores.push("build/".to_string());
    config.on_malformed_hunk = MalformedHunkPolicy::SkipFile;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.yaml");
    std::fs::write(&path, "checks: ['src/']\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.checks, vec!["src/"]);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, CheckError::Config(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "checks: ['repo/']\n").unwrap();
    let explicit = temp_dir.path().join("other.yaml");
    std::fs::write(&explicit, "checks: ['other/']\n").unwrap();

    let config = Config::resolve(temp_dir.path(), Some(&explicit)).unwrap();
    assert_eq!(config.checks, vec!["other/"]);
}

#[test]
fn test_resolve_uses_repo_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "checks: ['repo/']\n").unwrap();

    let config = Config::resolve(temp_dir.path(), None).unwrap();
    assert_eq!(config.checks, vec!["repo/"]);
}

#[test]
fn test_resolve_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::resolve(temp_dir.path(), None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_scan_mode_from_str() {
    assert_eq!(ScanMode::from_str("diff").unwrap(), ScanMode::Diff);
    assert_eq!(ScanMode::from_str("staged").unwrap(), ScanMode::Staged);
    assert_eq!(ScanMode::from_str("tree").unwrap(), ScanMode::Tree);

    let err = ScanMode::from_str("Diff").unwrap_err();
    assert!(matches!(err, CheckError::UnknownScanMode(ref m) if m == "Diff"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_scan_mode_display_roundtrip() {
    for mode in [ScanMode::Diff, ScanMode::Staged, ScanMode::Tree] {
        assert_eq!(ScanMode::from_str(&mode.to_string()).unwrap(), mode);
    }
}

#[test]
fn test_scan_mode_revision_limits() {
    assert_eq!(ScanMode::Diff.max_revisions(), 1);
    assert_eq!(ScanMode::Staged.max_revisions(), 1);
    assert_eq!(ScanMode::Tree.max_revisions(), 2);
}

#[test]
fn test_scan_options_default_matches_new() {
    let options = ScanOptions::default();
    assert_eq!(options, ScanOptions::new(ScanMode::Diff));
    assert!(options.color);
    assert!(options.revisions.is_empty());
    assert!(options.validate().is_ok());
}
