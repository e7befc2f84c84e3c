//! Commitcheck: flag problem patterns in the lines a git changeset adds.
//!
//! The library reads a unified diff, tracks new-file line numbers through
//! each hunk, and reports every added line matching a configured regex.

pub mod checker;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod git;
pub mod pattern;
pub mod report;
pub mod setup;

#[cfg(test)]
mod test_support;

pub use checker::{Checker, run};
pub use error::{CheckError, Result};
