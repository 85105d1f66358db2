//! Tracing setup for the CLI
//!
//! Logs go to stderr so stdout carries only generated output. The filter comes from
//! `SEQGEN_LOG` (same syntax as `RUST_LOG`), falling back to [`DEFAULT_DIRECTIVE`].

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "SEQGEN_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}
