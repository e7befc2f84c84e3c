//! Unified diff scanning for commitcheck.
//!
//! This module provides:
//! - Hunk header parsing and old/new line tracking (`hunk`)
//! - Pattern scanning of added lines with streamed findings (`scanner`)
//! - Splitting multi-file `git diff` output into per-file entries (`changeset`)
//!
//! Line numbers reported for findings are post-image line numbers, correct
//! across multiple hunks and regardless of how many lines were removed.

mod changeset;
mod helpers;
mod hunk;
mod scanner;


// Re-export public API
pub use changeset::{ChangesetReader, FileDiff, parse_changeset};
pub use hunk::{
    ContentLine, HunkLineTracker, LineClass, LineCursor, LineMarker, parse_hunk_header,
};
pub use scanner::{DiffScanner, Finding, FindingSink, Highlight, MatchedNames, WriteSink};
