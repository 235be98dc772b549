//! Tracing hooks for pipeline steps.
//!
//! Compiled to no-ops without the `tracing` feature; the subscriber is
//! installed by the binary.

#[cfg(feature = "tracing")]
pub fn emit_span(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::trace_span!("quiver", event);
    let _enter = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_span(_event: &str, _key_values: &[(&str, String)]) {}
