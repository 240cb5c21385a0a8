//! Beacon hand-offs, POST outcomes, retries, drops.

use serde::{Deserialize, Serialize};

/// Delivery-level counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryMetrics {
    /// Batch requests attempted (first attempt only).
    pub batches_sent: u64,
    /// Single-event requests attempted (first attempt only).
    pub singles_sent: u64,
    /// Requests accepted by the beacon mechanism.
    pub beacon_accepted: u64,
    /// POSTs that completed without error, retries included.
    pub posts_succeeded: u64,
    /// POSTs that failed, retries included.
    pub posts_failed: u64,
    pub retries_scheduled: u64,
    /// Deliveries abandoned after the last retry.
    pub dropped: u64,
}

impl DeliveryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of POSTs that failed (0.0–1.0).
    pub fn post_failure_rate(&self) -> f64 {
        let total = self.posts_succeeded + self.posts_failed;
        if total == 0 {
            return 0.0;
        }
        self.posts_failed as f64 / total as f64
    }
}
