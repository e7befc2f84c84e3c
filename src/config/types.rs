//! Configuration types and defaults for commitcheck.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use crate::error::CheckError;
use crate::pattern::PatternSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Config file looked up at the repository root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".commitcheck.yaml";

/// Which two repository states are compared to produce the changeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Working tree against the index, or against `<commit>` when given.
    #[default]
    Diff,
    /// Index against HEAD, or against `<commit>` when given.
    Staged,
    /// `<base>` against `<against>`, or against the working tree.
    Tree,
}

impl ScanMode {
    /// Largest number of revision arguments the mode accepts.
    pub fn max_revisions(self) -> usize {
        match self {
            ScanMode::Diff | ScanMode::Staged => 1,
            ScanMode::Tree => 2,
        }
    }

    /// Reject more revision arguments than the mode accepts.
    pub fn check_revisions(self, revisions: &[String]) -> Result<(), CheckError> {
        if revisions.len() > self.max_revisions() {
            return Err(CheckError::Usage(format!(
                "check type '{}' accepts at most {} revision(s), got {}",
                self,
                self.max_revisions(),
                revisions.len()
            )));
        }
        Ok(())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::Diff => "diff",
            ScanMode::Staged => "staged",
            ScanMode::Tree => "tree",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diff" => Ok(Self::Diff),
            "staged" => Ok(Self::Staged),
            "tree" => Ok(Self::Tree),
            other => Err(CheckError::UnknownScanMode(other.to_string())),
        }
    }
}

/// What to do when a file's diff contains a malformed hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedHunkPolicy {
    /// Stop the whole scan with an error (default).
    #[default]
    Abort,
    /// Log a warning and continue with the next file.
    SkipFile,
}

/// Default problem patterns: trailing whitespace only.
pub fn default_patterns() -> Vec<PatternSpec> {
    vec![PatternSpec::new(
        r"[ \t]+$",
        Some("PTWS"),
        "Trailing whitespace",
    )]
}

/// Default check list: every path.
pub fn default_checks() -> Vec<String> {
    vec![".*".to_string()]
}
