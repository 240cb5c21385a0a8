use std::time::Duration;

use crate::models::{Timer, TimerId};

/// One-shot timers on the host event loop.
///
/// When a timer elapses the host hands the [`Timer`] back to the tracker.
/// A cleared timer must never be delivered.
pub trait Scheduler {
    fn set_timer(&self, delay: Duration, timer: Timer) -> TimerId;
    fn clear_timer(&self, id: TimerId);
}
