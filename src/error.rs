//! Error types for commitcheck.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so the
//! binaries can report a failure without knowing where it came from.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for commitcheck operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A configured regular expression does not compile.
    #[error("invalid regex pattern '{pattern}': {source}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A line starting with `@@` is not a valid unified-diff hunk header.
    #[error("malformed hunk header: '{line}'")]
    MalformedHunkHeader { line: String },

    /// The requested scan mode is not one of diff, staged or tree.
    #[error("unknown check type: {0} (expected diff, staged or tree)")]
    UnknownScanMode(String),

    /// Arguments were syntactically fine but do not make sense together.
    #[error("{0}")]
    Usage(String),

    /// The configuration file could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// Git could not be run or exited with a failure.
    #[error("git operation failed: {0}")]
    Git(String),

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Build a [`CheckError::PatternCompile`] for `pattern`.
    pub fn pattern_compile(pattern: impl Into<String>, source: regex::Error) -> Self {
        CheckError::PatternCompile {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UnknownScanMode(_) | CheckError::Usage(_) => exit_codes::USAGE_ERROR,
            CheckError::PatternCompile { .. }
            | CheckError::MalformedHunkHeader { .. }
            | CheckError::Config(_)
            | CheckError::Git(_)
            | CheckError::Io(_) => exit_codes::ERROR,
        }
    }
}

/// Result type alias for commitcheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
