use serde::{Deserialize, Serialize};

/// Queue-level counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueMetrics {
    pub enqueued: u64,
    /// Events refused because consent was revoked.
    pub refused_without_consent: u64,
    /// Oldest events evicted by the depth bound.
    pub overflowed: u64,
    pub flushes: u64,
}

impl QueueMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}
