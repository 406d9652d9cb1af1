//! Structured logging setup.
//!
//! The library crates only emit `tracing` events. Hosts embedding the
//! journal call [`init`] once at startup to install a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Level used when the configured one does not parse.
const FALLBACK_LEVEL: &str = "info";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    }
    installed
}

/// Filter for a configured level, falling back to `info` when it is invalid.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|error| {
        tracing::warn!(level, %error, fallback = FALLBACK_LEVEL, "Invalid log level");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = LoggingConfig::default();
        // Another test may have installed a subscriber first; either way
        // the second call must not install one.
        let _ = init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn configured_level_is_used() {
        assert_eq!(level_filter("debug").to_string(), "debug");
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        assert_eq!(level_filter("jurnal=loud").to_string(), FALLBACK_LEVEL);
    }
}
