use std::sync::Once;

use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogLevel;

static TRACING_INIT: Once = Once::new();

/// Filter directive for the number of `-v` flags, if any were given.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Directive used when `RUST_LOG` is absent: `-v` flags, then the configured level.
pub fn fallback_directive(verbose: u8, configured: LogLevel) -> &'static str {
    verbosity_directive(verbose).unwrap_or(configured.as_directive())
}

/// Picks the filter directive: a non-empty `RUST_LOG`, else [`fallback_directive`].
pub fn select_directive(rust_log: Option<&str>, verbose: u8, configured: LogLevel) -> String {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(env) => env.to_string(),
        None => fallback_directive(verbose, configured).to_string(),
    }
}

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init(verbose: u8, configured: LogLevel) {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directive = select_directive(rust_log.as_deref(), verbose, configured);
        let (filter, rejected) = match EnvFilter::try_new(&directive) {
            Ok(filter) => (filter, None),
            Err(err) => (
                EnvFilter::new(fallback_directive(verbose, configured)),
                Some(err),
            ),
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
        if let Some(err) = rejected {
            warn!(%directive, error = %err, "ignoring invalid RUST_LOG");
        }
    });
}
