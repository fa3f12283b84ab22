//! Tracing subscriber installation.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable text.
    Text,
}

/// Install the global subscriber, filtered by `RUST_LOG`.
///
/// A second installation fails; the failure is logged through the
/// subscriber already in place and otherwise ignored.
pub fn init(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
