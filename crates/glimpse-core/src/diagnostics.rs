//! Debug-gated diagnostics shared by every component of one tracker.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::traits::DiagnosticSink;

/// Forwards to a [`DiagnosticSink`] only while debug mode is on.
/// Clones share the same switch.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Rc<dyn DiagnosticSink>,
    enabled: Rc<Cell<bool>>,
}

impl Diagnostics {
    pub fn new(sink: Rc<dyn DiagnosticSink>, enabled: bool) -> Self {
        Self {
            sink,
            enabled: Rc::new(Cell::new(enabled)),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn log(&self, message: impl AsRef<str>) {
        if self.enabled.get() {
            self.sink.log(message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.enabled.get() {
            self.sink.warn(message.as_ref());
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.enabled.get())
            .finish()
    }
}
