//! slsgen library - expose modules for testing
//!
//! This library exposes the command handlers used by the `slsgen` binary.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;
pub use sls_logger as logger;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the `tracing` subscriber used by the library crates.
///
/// `RUST_LOG` wins over the `-v` level when set.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
