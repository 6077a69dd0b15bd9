//! Telemetry helpers for applications embedding `multiline-chart-rs`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call one of the
//! helpers below or install their own `tracing` subscriber.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Same as [`init_default_tracing`] but with an explicit filter directive,
/// e.g. `"multiline_chart=trace"` while debugging drag selection.
#[must_use]
pub fn init_tracing_with_filter(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return install(tracing_subscriber::EnvFilter::new(directive));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
