//! Exit code constants for the commitcheck binaries.
//!
//! - 0: Clean, no pattern matched any added line
//! - 1: At least one pattern matched
//! - 1: Configuration, pattern, diff or git error
//! - 2: Usage error (unknown scan mode, wrong revision count)

/// No pattern matched.
pub const CLEAN: i32 = 0;

/// At least one pattern matched an added line.
pub const MATCHES_FOUND: i32 = 1;

/// Invalid configuration, invalid regex, malformed diff or git failure.
///
/// Shares its value with [`MATCHES_FOUND`]; both mean "do not commit".
pub const ERROR: i32 = 1;

/// The invocation itself was wrong: unknown scan mode or bad arguments.
pub const USAGE_ERROR: i32 = 2;
