//! Tracing setup for hosts without their own subscriber

use anyhow::{Context, Result};
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

/// Environment variable selecting the max log level
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Install a global fmt subscriber with the level from `LOG_LEVEL` (default info)
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<()> {
    let level = parse_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

fn parse_level(value: Option<&str>) -> TraceLevel {
    match value.unwrap_or("info").to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}
