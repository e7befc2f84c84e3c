//! Tests for pattern compilation.

use super::{PatternSet, PatternSpec};
use crate::error::CheckError;

#[test]
fn test_explicit_names_are_kept() {
    let specs = vec![
        PatternSpec::new(r"[ \t]+$", Some("PTWS"), "Trailing whitespace"),
        PatternSpec::new("TODO", Some("TODO"), "Unresolved TODO"),
    ];
    let set = PatternSet::compile(&specs).unwrap();

    let names: Vec<&str> = set.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["PTWS", "TODO"]);
    assert_eq!(set.iter().next().unwrap().description(), "Trailing whitespace");
}

#[test]
fn test_missing_names_use_ordinal() {
    let specs = vec![
        PatternSpec::new("a", None, ""),
        PatternSpec::new("b", Some("B"), ""),
        PatternSpec::new("c", None, ""),
    ];
    let set = PatternSet::compile(&specs).unwrap();

    let names: Vec<&str> = set.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["P000", "B", "P002"]);
}

#[test]
fn test_ordinal_names_are_zero_padded() {
    let specs: Vec<PatternSpec> = (0..12)
        .map(|i| PatternSpec::new(format!("x{}", i), None, ""))
        .collect();
    let set = PatternSet::compile(&specs).unwrap();

    assert_eq!(set.len(), 12);
    assert_eq!(set.iter().last().unwrap().name(), "P011");
}

#[test]
fn test_invalid_regex_fails_at_construction() {
    let specs = vec![
        PatternSpec::new("ok", None, ""),
        PatternSpec::new("(unclosed", Some("BAD"), ""),
    ];

    let err = PatternSet::compile(&specs).unwrap_err();
    match err {
        CheckError::PatternCompile { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected PatternCompile, got {:?}", other),
    }
}

#[test]
fn test_duplicate_names_rejected() {
    let specs = vec![
        PatternSpec::new("a", Some("P001"), ""),
        PatternSpec::new("b", None, ""),
    ];
    // Second pattern's default name is P001 as well.
    let err = PatternSet::compile(&specs).unwrap_err();
    assert!(matches!(err, CheckError::Config(_)));
    assert!(err.to_string().contains("P001"));
}

#[test]
fn test_empty_set() {
    let set = PatternSet::compile(&[]).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn test_regex_searches_unanchored() {
    let specs = vec![PatternSpec::new("TODO", None, "")];
    let set = PatternSet::compile(&specs).unwrap();
    let pattern = set.iter().next().unwrap();

    assert!(pattern.regex().is_match("code # TODO fix"));
    assert!(!pattern.regex().is_match("code # todo fix"));
}

#[test]
fn test_spec_deserializes_without_name_or_description() {
    let spec: PatternSpec = serde_yaml::from_str("pattern: 'FIXME'").unwrap();
    assert_eq!(spec.pattern, "FIXME");
    assert_eq!(spec.name, None);
    assert_eq!(spec.description, "");
}
