//! # glimpse-observability
//!
//! Structured tracing setup with event helpers, delivery metrics, and a
//! [`TracingSink`] that routes debug-mode diagnostics into the same log.

pub mod metrics;
pub mod sink;
pub mod tracing_setup;

pub use metrics::{DeliveryMetrics, QueueMetrics};
pub use sink::TracingSink;
pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
