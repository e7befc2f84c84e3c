//! Configuration model for commitcheck.
//!
//! This module defines the Config struct that represents `.commitcheck.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
mod options;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use options::ScanOptions;
pub use types::{CONFIG_FILE_NAME, MalformedHunkPolicy, ScanMode};
