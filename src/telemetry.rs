//! Logging setup
//!
//! Selection reports are written to stdout, so every log line goes to
//! stderr. `RUST_LOG` wins when set; otherwise the configured level
//! applies to this crate's own targets only.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the global tracing subscriber
///
/// Later calls are no-ops, so a harness that embeds the library and
/// already installed its own subscriber loses nothing by calling this.
///
/// # Examples
///
/// ```no_run
/// tagsieve::telemetry::init("debug");
/// tracing::info!("Evaluating selection");
/// ```
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| crate_filter(default_level));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}

/// Filter scoped to this crate at the given level
///
/// Level strings come straight from configuration; an unparseable one
/// leaves the filter without directives rather than failing startup.
fn crate_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("tagsieve={level}"))
}
