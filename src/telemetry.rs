//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Reads the `CATALOG_LOG` environment variable (e.g.
/// `CATALOG_LOG=item_catalog=debug`) and falls back to `default_filter`
/// when it is unset or invalid. Calling this more than once is a no-op.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CATALOG_LOG")
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // another subscriber may already be installed by an embedding application
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
