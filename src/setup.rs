//! Process-wide initialization for the binaries.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger. Safe to call more than once; only the first call acts.
///
/// Log level defaults to `warn` and follows `RUST_LOG` when set. Logs go to
/// stderr so they never interleave with findings on stdout.
pub fn init_process() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("warn");
        // A logger installed by an embedding program takes precedence
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_process_is_idempotent() {
        init_process();
        init_process();
        assert!(INIT.is_completed());
    }
}
