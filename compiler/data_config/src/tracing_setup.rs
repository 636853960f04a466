//! Logging setup for binaries, tools and tests embedding the registry.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "RUST_LOG";

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Only the first call does any work; later calls report the same outcome.
/// Returns whether this crate's subscriber is the active one. Nothing is
/// installed when `RUST_LOG` is unset or unparsable, or when the embedder
/// already installed a global subscriber.
///
/// `RUST_LOG=data_config=debug` shows metadata builds and registry
/// construction, `RUST_LOG=data_config=trace` every handler lookup.
pub fn init_tracing() -> bool {
    *INSTALLED.get_or_init(|| match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).compact())
            .with(filter)
            .try_init()
            .is_ok(),
        Err(_) => false,
    })
}
