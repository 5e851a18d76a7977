//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the notigen tracing/logging system.
///
/// Reads the `NOTIGEN_LOG` environment variable for per-subsystem log
/// levels, e.g. `NOTIGEN_LOG=notigen_core::extract=debug`. Falls back to
/// `notigen=info` if `NOTIGEN_LOG` is not set or is invalid.
///
/// Calling this more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("NOTIGEN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("notigen=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
