//! Structured logging setup.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! the host installs a subscriber.  [`init`] installs the usual one: a `fmt`
//! subscriber filtered by `RUST_LOG`, falling back to `info`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber with an `info` default filter.
///
/// Returns `false` if a global subscriber was already installed (for
/// example by the host application or by an earlier call); the existing one
/// is kept.
pub fn init() -> bool {
    init_with_default("info")
}

/// Like [`init`], with `default_filter` used when `RUST_LOG` is absent or
/// invalid.
pub fn init_with_default(default_filter: &str) -> bool {
    // `RUST_LOG` wins; otherwise fall back to the given directive.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init()
        .is_ok()
}
