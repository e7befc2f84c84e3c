//! Path scoping for changed files.
//!
//! Ignore patterns win over check patterns, and a path that matches no check
//! pattern is out of scope. Both lists are regexes matched from the start of
//! the path (not required to match to the end).

use crate::error::{CheckError, Result};
use regex::Regex;

/// Decides which changed files are scanned.
#[derive(Debug, Clone)]
pub struct ChangesetFilter {
    ignore_patterns: Vec<Regex>,
    check_patterns: Vec<Regex>,
}

impl ChangesetFilter {
    /// Compile ignore and check path patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(ChangesetFilter)` - All patterns compiled
    /// * `Err(CheckError::PatternCompile)` - A path regex is invalid
    pub fn new<S: AsRef<str>>(ignores: &[S], checks: &[S]) -> Result<Self> {
        Ok(Self {
            ignore_patterns: compile_anchored(ignores)?,
            check_patterns: compile_anchored(checks)?,
        })
    }

    /// Returns true if `path` should be scanned.
    pub fn in_scope(&self, path: &str) -> bool {
        if self.ignore_patterns.iter().any(|p| p.is_match(path)) {
            return false;
        }
        self.check_patterns.iter().any(|p| p.is_match(path))
    }
}

fn compile_anchored<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            Regex::new(&format!("^(?:{})", p)).map_err(|e| CheckError::pattern_compile(p, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(ignores: &[&str], checks: &[&str]) -> ChangesetFilter {
        ChangesetFilter::new(ignores, checks).unwrap()
    }

    #[test]
    fn test_ignore_wins_over_check() {
        let f = filter(&["vendor/.*"], &[r".*\.py"]);
        assert!(!f.in_scope("vendor/lib.py"));
        assert!(f.in_scope("src/lib.py"));
    }

    #[test]
    fn test_no_check_match_is_excluded() {
        let f = filter(&[], &[r".*\.py"]);
        assert!(!f.in_scope("src/lib.rs"));
    }

    #[test]
    fn test_no_check_patterns_means_nothing_in_scope() {
        let f = filter(&[], &[]);
        assert!(!f.in_scope("src/lib.py"));
        assert!(!f.in_scope(""));
    }

    #[test]
    fn test_match_is_anchored_at_start() {
        let f = filter(&[], &["src/"]);
        assert!(f.in_scope("src/main.rs"));
        assert!(!f.in_scope("lib/src/main.rs"));

        let f = filter(&["docs"], &[".*"]);
        assert!(!f.in_scope("docs/index.md"));
        assert!(f.in_scope("site/docs/index.md"));
    }

    #[test]
    fn test_match_is_not_anchored_at_end() {
        // Same as a prefix match: ".*\.py" also accepts "x.pyc".
        let f = filter(&[], &[r".*\.py"]);
        assert!(f.in_scope("cache/x.pyc"));
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let f = filter(&[], &["a|b"]);
        assert!(f.in_scope("a.txt"));
        assert!(f.in_scope("b.txt"));
        assert!(!f.in_scope("cab.txt"));
    }

    #[test]
    fn test_invalid_path_pattern_fails() {
        let err = ChangesetFilter::new(&["["], &[".*"]).unwrap_err();
        match err {
            CheckError::PatternCompile { pattern, .. } => assert_eq!(pattern, "["),
            other => panic!("expected PatternCompile, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_owned_strings() {
        let checks = vec![r".*\.rs".to_string()];
        let f = ChangesetFilter::new(&[] as &[String], &checks).unwrap();
        assert!(f.in_scope("src/lib.rs"));
    }
}
