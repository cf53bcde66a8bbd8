//! Opt-in log output for tools built on the parser.
//!
//! The library only emits `tracing` events; nothing is printed unless an
//! application installs a subscriber, for example with [`init_tracing`].

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used when neither `SOL_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `SOL_LOG`, then `RUST_LOG`.
///
/// Safe to call more than once; only the first call has an effect, and
/// an already-installed global subscriber is left alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directives = filter_directives(
            std::env::var("SOL_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter =
            EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}

/// First non-empty of `sol_log`, `rust_log`, [`DEFAULT_FILTER`].
fn filter_directives(sol_log: Option<String>, rust_log: Option<String>) -> String {
    sol_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
