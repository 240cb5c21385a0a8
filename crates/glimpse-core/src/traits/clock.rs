use chrono::{DateTime, Utc};

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real time via `chrono::Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
