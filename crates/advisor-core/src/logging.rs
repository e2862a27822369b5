//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;

use crate::error::{AdvisorError, Result};

/// Build the log filter: `RUST_LOG` wins, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global fmt subscriber, writing to stderr so stdout stays
/// reserved for assistant output.
///
/// Fails if a global subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AdvisorError::Config(format!("logging init failed: {}", e)))
}
