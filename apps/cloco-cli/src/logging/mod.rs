//! CLI diagnostics
//!
//! Diagnostics are emitted through `tracing` and written to stderr so that
//! command output on stdout stays machine-readable. Verbosity comes from the
//! global `--verbose` / `--debug` / `--trace` flags or the matching
//! `CLOCO_*` environment variables; `RUST_LOG` overrides both.

mod level;
mod redaction;

pub use level::LogLevel;
pub use redaction::redact;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber for the given level
///
/// Calling this more than once keeps the first subscriber.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,cloco_cli={}", level.directive()))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(level >= LogLevel::Debug)
        .without_time()
        .try_init();
}
