//! Log setup for binaries and demos built on `fngraph`.
//!
//! Events are emitted under the module path of their source:
//! - `fngraph::config`: skipped override leaves (`warn`) and resolved
//!   passthrough counts (`debug`)
//! - `fngraph::api`: derived geometry (`debug`), rejected point percentages
//!   (`warn`) and per-draw segment counts (`trace`)
//! - `fngraph::platform_gtk`: draw callback failures (`warn`)
//!
//! Library users that already run a subscriber need nothing from here.

/// Filter used when `RUST_LOG` is unset: plotter warnings only.
pub const DEFAULT_DIRECTIVES: &str = "fngraph=warn";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVES)
}

/// Same as [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"fngraph::api=trace"` to see every draw.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{init_default_tracing, init_tracing};

    #[test]
    fn second_initialization_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_tracing("fngraph=trace"));
    }
}
