//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LEVEL: &str = "warn";

fn env_filter(default_level: &str) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_or_default(directives.as_deref(), default_level)
}

/// Parse `directives`, falling back to `default_level` when unset or invalid
fn filter_or_default(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Initialize tracing subscriber with human-readable output on stderr
///
/// Stdout is left to command output.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_LEVEL))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize tracing subscriber with JSON output on stderr
pub fn init_tracing_json() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_LEVEL))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();
}
