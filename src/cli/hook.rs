//! Builder-based argument parsing for the `commitcheck-hook` binary.
//!
//! Meant to be called from `.git/hooks/pre-commit`, so the default check type
//! is `staged`.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

use super::{OptionsAdapter, TYPE_HELP, color_enabled};
use crate::config::ScanOptions;
use crate::error::Result;

/// Build the clap command for the hook front-end.
pub fn hook_command() -> Command {
    Command::new("commitcheck-hook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Commit checker for git hooks: checks the staged changeset by default")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("More verbose output"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("TYPE")
                .default_value("staged")
                .help(TYPE_HELP),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: .commitcheck.yaml at the repository root)"),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Run as if started in DIR"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Do not highlight matches"),
        )
        .arg(
            Arg::new("revisions")
                .value_name("REVISION")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Check revisions"),
        )
}

/// Parsed hook arguments.
#[derive(Debug)]
pub struct HookArgs {
    matches: ArgMatches,
}

impl HookArgs {
    /// Parse command-line arguments, exiting with usage on error.
    pub fn parse() -> Self {
        Self {
            matches: hook_command().get_matches(),
        }
    }

    pub fn try_parse_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self {
            matches: hook_command().try_get_matches_from(args)?,
        })
    }
}

impl OptionsAdapter for HookArgs {
    fn into_scan_options(self) -> Result<ScanOptions> {
        let m = self.matches;
        let check_type = m
            .get_one::<String>("type")
            .map(String::as_str)
            .unwrap_or("staged");

        Ok(ScanOptions {
            mode: check_type.parse()?,
            revisions: m
                .get_many::<String>("revisions")
                .map(|revs| revs.cloned().collect())
                .unwrap_or_default(),
            verbose: m.get_flag("verbose"),
            config_path: m.get_one::<PathBuf>("config").cloned(),
            repo: m.get_one::<PathBuf>("directory").cloned(),
            color: color_enabled(m.get_flag("no-color")),
        })
    }
}
