//! # glimpse-tracker
//!
//! The collection engine: a tracker instance owns the event queue, the batch
//! timer, the session and delivery state, and the page-view lifecycle. The
//! host adapter feeds it platform signals and elapsed timers; everything it
//! does is synchronous and never fails toward the caller.
//!
//! ## Modules
//!
//! - `tracker` — `Tracker`, the public control surface
//! - `bootstrap` — script-tag bootstrap and injected capabilities
//! - `queue` — bounded FIFO of pending envelopes
//! - `batcher` — size- and time-triggered flushing
//! - `envelope` — envelope construction with sanitized context
//! - `lifecycle` — page-view state machine
//! - `scroll` — scroll-depth milestones
//! - `instrumentation` — reactions to page signals and timers

pub mod batcher;
pub mod bootstrap;
pub mod envelope;
mod instrumentation;
pub mod lifecycle;
pub mod queue;
pub mod scroll;
pub mod tracker;

pub use bootstrap::Capabilities;
pub use lifecycle::PagePhase;
pub use tracker::{Tracker, TrackerMetrics};
