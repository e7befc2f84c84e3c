//! Derive-based argument parsing for the `commitcheck` binary.

use clap::Parser;
use std::path::PathBuf;

use super::{OptionsAdapter, TYPE_HELP, color_enabled};
use crate::config::ScanOptions;
use crate::error::Result;

/// Commitcheck: flag problem patterns in the lines a git changeset adds.
///
/// Each match is printed as `<path>:<line>:<pattern>:<line text>`, followed
/// by a summary of the patterns that fired. Exits 1 if anything matched.
#[derive(Parser, Debug)]
#[command(name = "commitcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// More verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short = 't', long = "type", default_value = "diff", value_name = "TYPE", help = TYPE_HELP)]
    pub check_type: String,

    /// Config file (default: .commitcheck.yaml at the repository root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Do not highlight matches
    #[arg(long)]
    pub no_color: bool,

    /// Check revisions
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub revisions: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments, exiting with usage on error.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl OptionsAdapter for Cli {
    fn into_scan_options(self) -> Result<ScanOptions> {
        Ok(ScanOptions {
            mode: self.check_type.parse()?,
            revisions: self.revisions,
            verbose: self.verbose,
            config_path: self.config,
            repo: self.directory,
            color: color_enabled(self.no_color),
        })
    }
}
