//! Lumo Driver
//!
//! Reads JSON-encoded literal trees, runs them through `lumo_parse` and
//! `lumo_eval`, and reports results or diagnostics.

pub mod commands;
pub mod reader;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=lumo_eval=debug` or `RUST_LOG=lumo_parse=trace`.
/// Output goes to stderr so program results on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
