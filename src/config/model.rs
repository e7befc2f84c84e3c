//! Config struct definition and default implementation.

use super::types::*;
use crate::pattern::PatternSpec;
use serde::{Deserialize, Serialize};

/// Configuration for a commitcheck run.
///
/// This struct represents the contents of `.commitcheck.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Problem patterns searched in every added line.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternSpec>,

    /// Path regexes that exclude a file (anchored at the start of the path).
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Path regexes that include a file (anchored at the start of the path).
    #[serde(default = "default_checks")]
    pub checks: Vec<String>,

    /// Whether a malformed hunk header aborts the scan or skips the file.
    #[serde(default)]
    pub on_malformed_hunk: MalformedHunkPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            ignores: Vec::new(),
            checks: default_checks(),
            on_malformed_hunk: MalformedHunkPolicy::default(),
        }
    }
}
