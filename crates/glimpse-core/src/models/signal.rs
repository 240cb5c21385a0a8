//! Platform observations fed to the tracker by the host adapter.

use serde::{Deserialize, Serialize};

/// How the URL changed in a single-page application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    PushState,
    ReplaceState,
    PopState,
}

/// Scroll geometry in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Percentage of scrollable depth reached; 100 when the content fits the viewport.
    pub fn percentage(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 100.0;
        }
        (self.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

/// Nearest anchor ancestor of a click target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Raw `href` attribute, possibly relative.
    pub href: String,
    pub text: String,
}

/// An uncaught script error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

/// Navigation timing marks in milliseconds since the time origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationTiming {
    pub response_start: f64,
    pub dom_content_loaded: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    /// Whole milliseconds between the origin and `mark`; `None` for unset marks.
    fn elapsed(mark: f64) -> Option<u64> {
        (mark.is_finite() && mark > 0.0).then(|| mark.round() as u64)
    }

    pub fn ttfb_ms(&self) -> Option<u64> {
        Self::elapsed(self.response_start)
    }

    pub fn dom_ready_ms(&self) -> Option<u64> {
        Self::elapsed(self.dom_content_loaded)
    }

    pub fn load_ms(&self) -> Option<u64> {
        Self::elapsed(self.load_event_end)
    }
}

/// Everything the instrumentation layer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageSignal {
    Navigation(NavigationKind),
    Scroll,
    /// The load event finished; timing marks are final.
    Loaded(NavigationTiming),
    Click(Option<Anchor>),
    Error(ErrorReport),
    UnhandledRejection(String),
    VisibilityHidden,
    /// The document became visible again after being hidden.
    VisibilityVisible,
    BeforeUnload,
}
