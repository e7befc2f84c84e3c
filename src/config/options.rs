//! Per-invocation options shared by every command-line front-end.

use super::types::ScanMode;
use crate::error::Result;
use std::path::PathBuf;

/// Everything a front-end collects from its arguments.
///
/// Both binaries build this value with their own argument conventions; the
/// checker only ever sees the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub mode: ScanMode,
    /// Zero, one or two revisions depending on `mode`.
    pub revisions: Vec<String>,
    /// Print `Checking <path>` for each file in scope.
    pub verbose: bool,
    /// Explicit config file; `.commitcheck.yaml` at the repo root otherwise.
    pub config_path: Option<PathBuf>,
    /// Directory to run in instead of the current one.
    pub repo: Option<PathBuf>,
    /// Highlight matches with ANSI escapes.
    pub color: bool,
}

impl ScanOptions {
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            revisions: Vec::new(),
            verbose: false,
            config_path: None,
            repo: None,
            color: true,
        }
    }

    /// Check the options before anything touches the repository.
    pub fn validate(&self) -> Result<()> {
        self.mode.check_revisions(&self.revisions)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(ScanMode::default())
    }
}
