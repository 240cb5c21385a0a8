use glimpse_core::traits::DiagnosticSink;

/// Routes diagnostics into `tracing` under the `glimpse::diagnostics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "glimpse::diagnostics", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "glimpse::diagnostics", "{}", message);
    }
}
