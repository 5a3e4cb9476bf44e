//! Telemetry & Observability
//!
//! Provides structured logging for calculator evaluations.
//! Features:
//! - Configurable log levels via RUST_LOG or the `[logging]` config section
//! - Output on stderr so stdout carries only results
//! - Log-safe rendering of user input

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::operator::Operator;

/// Filter used when the requested directive fails to parse.
pub const FALLBACK_FILTER: &str = "warn";

/// Initialize global tracing subscriber.
///
/// `RUST_LOG` wins over `config_filter`. When neither is set tracing is left
/// uninitialized to keep CLI output clean.
pub fn init_tracing(config_filter: Option<&str>) {
    if let Some(filter) = resolve_filter(std::env::var("RUST_LOG").ok(), config_filter) {
        init_tracing_with_filter(&filter);
    }
}

/// Pick the effective filter directive from the environment and config.
pub fn resolve_filter(env_filter: Option<String>, config_filter: Option<&str>) -> Option<String> {
    env_filter
        .filter(|f| !f.trim().is_empty())
        .or_else(|| config_filter.map(str::to_string))
}

/// Initialize with custom filter string.
///
/// Only the first call installs a subscriber; later calls (including ones
/// with a different filter) are no-ops. A directive `EnvFilter` rejects
/// falls back to [`FALLBACK_FILTER`].
pub fn init_tracing_with_filter(filter: &str) {
    // Library tests and the binary may both reach this; the global
    // subscriber can only be set once per process.
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr); // Write to stderr, not stdout

        let filter_layer =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    });
}

/// Record one evaluation at debug level.
pub fn record_evaluation(op: Operator, lhs: f64, rhs: f64, result: f64) {
    debug!(
        operator = op.name(),
        lhs,
        rhs,
        result,
        non_finite = !result.is_finite(),
        "Evaluated"
    );
}

/// Sanitize a string for safe log output by escaping control characters.
/// Prevents log injection where operands embed newlines to forge log entries.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x1b' => out.push_str("\\e"),
            '\x00' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}
