use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use glimpse_core::models::{Timer, TimerId};
use glimpse_core::traits::{Clock, Scheduler};

use crate::clock::ManualClock;

/// A timer waiting to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub due: DateTime<Utc>,
    pub delay: Duration,
    pub timer: Timer,
}

/// Records timers against a [`ManualClock`]; the test decides when they fire.
#[derive(Debug)]
pub struct ManualScheduler {
    clock: Rc<ManualClock>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<ScheduledTimer>>,
    history: RefCell<Vec<ScheduledTimer>>,
}

impl ManualScheduler {
    pub fn new(clock: Rc<ManualClock>) -> Self {
        Self {
            clock,
            next_id: Cell::new(1),
            pending: RefCell::new(Vec::new()),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Timers armed and not yet fired or cleared, in arming order.
    pub fn pending(&self) -> Vec<ScheduledTimer> {
        self.pending.borrow().clone()
    }

    /// Every timer ever armed, including fired and cleared ones.
    pub fn history(&self) -> Vec<ScheduledTimer> {
        self.history.borrow().clone()
    }

    pub fn pending_of(&self, matches: impl Fn(&Timer) -> bool) -> Vec<ScheduledTimer> {
        self.pending
            .borrow()
            .iter()
            .filter(|t| matches(&t.timer))
            .copied()
            .collect()
    }

    /// Remove and return the earliest timer due at or before `until`.
    /// Ties fire in arming order.
    pub fn pop_due(&self, until: DateTime<Utc>) -> Option<ScheduledTimer> {
        let mut pending = self.pending.borrow_mut();
        let idx = pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;
        Some(pending.remove(idx))
    }
}

impl Scheduler for ManualScheduler {
    fn set_timer(&self, delay: Duration, timer: Timer) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let due = self.clock.now()
            + chrono::Duration::from_std(delay).unwrap_or_else(|_| chrono::Duration::zero());
        let scheduled = ScheduledTimer {
            id,
            due,
            delay,
            timer,
        };
        self.pending.borrow_mut().push(scheduled);
        self.history.borrow_mut().push(scheduled);
        id
    }

    fn clear_timer(&self, id: TimerId) {
        self.pending.borrow_mut().retain(|t| t.id != id);
    }
}
