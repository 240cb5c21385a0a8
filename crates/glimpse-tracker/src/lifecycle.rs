//! Page-view lifecycle.
//!
//! ```text
//!   load / route change ──> NewPage ──30s timer──> Engaged
//!                              │                     │
//!                              └──── hide, unload, navigation ───> Leaving
//!                                                                    │
//!                      NewPage or Engaged <──────── visible again ───┘
//! ```
//!
//! Entering `Leaving` always flushes the queue and sends the page's duration.
//! A navigation-triggered `Leaving` is immediately followed by a new `NewPage`.
//! A page shown again resumes the phase it had before it was hidden.

use chrono::{DateTime, Utc};
use glimpse_core::models::TimerId;

use crate::scroll::ScrollMilestones;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    NewPage,
    Engaged,
    Leaving,
}

impl PagePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewPage => "new_page",
            Self::Engaged => "engaged",
            Self::Leaving => "leaving",
        }
    }
}

/// State of the page view currently on screen.
#[derive(Debug)]
pub struct PageView {
    /// Raw location, compared verbatim to detect route changes.
    pub location: String,
    pub started_at: DateTime<Utc>,
    pub phase: PagePhase,
    pub milestones: ScrollMilestones,
    pub engagement_timer: Option<TimerId>,
    /// Set once the engagement transition has happened for this page view.
    pub engaged: bool,
}

impl PageView {
    pub fn new(location: String, now: DateTime<Utc>) -> Self {
        Self {
            location,
            started_at: now,
            phase: PagePhase::NewPage,
            milestones: ScrollMilestones::new(),
            engagement_timer: None,
            engaged: false,
        }
    }

    /// Start a new page view in place after a route change.
    pub fn restart(&mut self, location: String, now: DateTime<Utc>) {
        self.location = location;
        self.started_at = now;
        self.phase = PagePhase::NewPage;
        self.milestones.reset();
        self.engagement_timer = None;
        self.engaged = false;
    }

    /// Whole seconds since this page view began.
    pub fn seconds_on_page(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }

    /// `NewPage -> Engaged`. Returns whether the transition happened.
    pub fn engage(&mut self) -> bool {
        if self.phase == PagePhase::NewPage {
            self.phase = PagePhase::Engaged;
            self.engaged = true;
            true
        } else {
            false
        }
    }

    /// Any phase -> `Leaving`. Returns the phase left.
    pub fn leave(&mut self) -> PagePhase {
        std::mem::replace(&mut self.phase, PagePhase::Leaving)
    }

    /// `Leaving -> NewPage | Engaged` when the page is shown again. Returns the
    /// phase entered, or `None` when the page was not leaving.
    pub fn resume(&mut self) -> Option<PagePhase> {
        if self.phase != PagePhase::Leaving {
            return None;
        }
        self.phase = if self.engaged {
            PagePhase::Engaged
        } else {
            PagePhase::NewPage
        };
        Some(self.phase)
    }
}
