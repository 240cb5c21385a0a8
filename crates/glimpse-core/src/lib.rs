//! # glimpse-core
//!
//! Foundation crate for the Glimpse telemetry engine.
//! Defines the wire-level data model, the injectable platform capabilities,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod encoding;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BootstrapAttributes, TrackerConfig};
pub use diagnostics::Diagnostics;
pub use errors::{GlimpseError, GlimpseResult};
pub use models::{
    Anchor, BatchPayload, DeviceClass, DeviceProfile, ErrorReport, EventEnvelope, NavigationKind,
    NavigationTiming, PageSignal, PostCompletion, PostRequest, RequestId, RetryId, ScrollMetrics,
    SinglePayload, Timer, TimerId, UtmParams,
};
