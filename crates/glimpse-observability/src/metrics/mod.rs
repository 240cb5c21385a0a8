//! Counters describing what the tracker did with its events.

pub mod delivery_metrics;
pub mod queue_metrics;

pub use delivery_metrics::DeliveryMetrics;
pub use queue_metrics::QueueMetrics;
