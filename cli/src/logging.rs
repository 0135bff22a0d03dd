//! Logging setup for the command line.
//!
//! Diagnostics go to stderr so stdout only carries the report (and stays
//! valid JSON under `--json`). Set `DEBUG_LOGGING=1` to enable debug output
//! for sunderlog crates; `RUST_LOG` overrides both.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug_logging)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,sunderlog_core=debug,sunderlog_cli=debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}
