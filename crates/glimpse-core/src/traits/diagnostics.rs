/// Destination for debug-mode diagnostics.
pub trait DiagnosticSink {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
}
