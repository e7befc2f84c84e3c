//! Commitcheck: flag problem patterns in the lines a git changeset adds.
//!
//! This is the main entry point for the `commitcheck` CLI. It parses
//! arguments, runs the check, and maps errors to exit codes.

use commitcheck::cli::{Cli, OptionsAdapter};
use commitcheck::setup;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup::init_process();

    let mut stdout = std::io::stdout().lock();
    match cli
        .into_scan_options()
        .and_then(|options| commitcheck::run(&options, &mut stdout))
    {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
