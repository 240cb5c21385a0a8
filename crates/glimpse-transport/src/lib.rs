//! # glimpse-transport
//!
//! Delivery of batch and single-event payloads to the collector.
//!
//! Each send tries the platform beacon first. When the beacon is missing or
//! refuses the payload, the body is POSTed with keepalive; failed POSTs are
//! retried on an exponential backoff and dropped once retries run out.
//! Nothing is persisted: delivery is at-most-once.

pub mod backoff;
pub mod delivery;
pub mod endpoints;
#[cfg(feature = "http")]
pub mod http;

pub use backoff::RetryPolicy;
pub use delivery::Delivery;
pub use endpoints::Endpoints;
#[cfg(feature = "http")]
pub use http::{HttpTransport, HttpTransportConfig};
