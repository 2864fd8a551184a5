//! Diagnostic sink that forwards guard notices to the `tracing` log.

use tracing::info;

use theme_core::DiagnosticSink;

/// Emits each notice as an `INFO` event on the `themeguard::guard` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn notice(&self, message: &str) {
        info!(target: "themeguard::guard", "{message}");
    }
}
