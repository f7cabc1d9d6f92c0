// delicia_api/src/telemetry.rs

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Installs the global subscriber. INFO by default, `RUST_LOG` overrides.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();
}
