//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr; stdout carries the merged CSV.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info, including the merge summary
//! - 2 (`-vv`): debug, per-file progress and label resolution
//! - 3+ (`-vvv`): trace
//!
//! `RUST_LOG` takes precedence over the verbosity flag when it is set.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
