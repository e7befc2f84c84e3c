//! `commitcheck-hook`: the checker as called from `.git/hooks/pre-commit`.
//!
//! Checks the staged changeset unless told otherwise. A non-zero exit aborts
//! the commit.

use anyhow::Context;
use commitcheck::cli::{HookArgs, OptionsAdapter};
use commitcheck::{CheckError, exit_codes, setup};
use std::process::ExitCode;

fn check(args: HookArgs) -> anyhow::Result<i32> {
    let options = args.into_scan_options()?;
    let mode = options.mode;

    let mut stdout = std::io::stdout().lock();
    commitcheck::run(&options, &mut stdout).with_context(|| format!("{} check failed", mode))
}

fn main() -> ExitCode {
    let args = HookArgs::parse();
    setup::init_process();

    match check(args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("commitcheck: {:#}", err);
            let code = err
                .downcast_ref::<CheckError>()
                .map_or(exit_codes::ERROR, CheckError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}
