use std::cell::RefCell;

use glimpse_core::traits::DiagnosticSink;

/// Captures diagnostics instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    logs: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.borrow().iter().any(|w| w.contains(needle))
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
