//! Tracing subscriber setup.
//!
//! Logs always go to stderr so that `--format json` output on
//! stdout stays machine-readable.

use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("studypack={}", config.level)
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling
/// this twice is harmless; the second install is ignored.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
