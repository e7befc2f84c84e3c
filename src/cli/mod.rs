//! Command-line front-ends for commitcheck.
//!
//! Two interchangeable adapters turn arguments into the same [`ScanOptions`]:
//! - [`Cli`]: clap derive, used by `commitcheck`
//! - [`HookArgs`]: clap builder, used by `commitcheck-hook` from git hooks
//!
//! The checker never knows which one produced its options.

mod args;
mod hook;


pub use args::Cli;
pub use hook::{HookArgs, hook_command};

use crate::config::ScanOptions;
use crate::error::Result;

/// Help text for the `--type` option shared by both front-ends.
pub(crate) const TYPE_HELP: &str =
    "Check type: [diff|staged|tree], -t diff [<commit>], -t staged [<commit>], -t tree [<base> [<against>]]";

/// A source of scan options.
pub trait OptionsAdapter {
    /// Convert parsed arguments into options.
    ///
    /// # Returns
    ///
    /// * `Err(CheckError::UnknownScanMode)` - `--type` is not diff, staged or tree
    fn into_scan_options(self) -> Result<ScanOptions>;
}

/// Colour is on unless disabled by flag or by a non-empty `NO_COLOR`.
pub(crate) fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}
