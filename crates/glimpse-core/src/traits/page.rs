use crate::models::ScrollMetrics;

/// Read access to the current document.
pub trait PageContext {
    /// Absolute URL of the current location.
    fn location(&self) -> String;
    fn title(&self) -> String;
    /// Empty when there is none.
    fn referrer(&self) -> String;
    fn scroll_metrics(&self) -> ScrollMetrics;
}
