//! Tracing subscriber setup.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Turn a configured level into a filter.
///
/// A bare level is scoped to this crate so dependencies stay quiet;
/// anything else is taken as a full directive. Unparseable input falls
/// back to `session_vault=info`.
pub fn filter_for(level: &str) -> EnvFilter {
    let level = level.trim();
    if LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return EnvFilter::new(format!("session_vault={}", level.to_ascii_lowercase()));
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("session_vault=info"))
}

/// Install the global subscriber with a compact formatter.
///
/// Fails if a subscriber is already installed, which tests and embedders
/// can ignore.
pub fn init(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt::layer().compact())
        .try_init()
}
