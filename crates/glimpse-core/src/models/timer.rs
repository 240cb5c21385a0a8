use std::fmt;

/// Handle returned by a scheduler for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Identifies one delivery waiting on its backoff timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RetryId(pub u64);

/// What to run when a scheduled timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Batch flush of a partially filled queue.
    Flush,
    /// Backoff elapsed for a failed delivery.
    Retry(RetryId),
    /// Zero-delay callback after a history change.
    RouteSettle,
    /// Scroll evaluation after the throttle window.
    ScrollThrottle,
    /// One-shot dwell timer of the current page view.
    Engagement,
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flush => write!(f, "flush"),
            Self::Retry(id) => write!(f, "retry#{}", id.0),
            Self::RouteSettle => write!(f, "route_settle"),
            Self::ScrollThrottle => write!(f, "scroll_throttle"),
            Self::Engagement => write!(f, "engagement"),
        }
    }
}
