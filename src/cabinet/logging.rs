//! Diagnostic tracing for the cabinet binary.
//!
//! The library only emits events (`tracing::debug!` on creates and edits,
//! `trace!` on index moves). Installing a subscriber is the binary's job; output
//! goes to stderr so it never mixes with command output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `warn`, or `cabinet=debug` when `verbose` is set.
///
/// ```bash
/// RUST_LOG=cabinet=trace cabinet -v custom
/// ```
pub fn init(verbose: bool) {
    let fallback = if verbose { "cabinet=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
