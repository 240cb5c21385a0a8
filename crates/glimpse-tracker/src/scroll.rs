//! Scroll-depth milestones, each reported at most once per page view.

use glimpse_core::constants::SCROLL_MILESTONES;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollMilestones {
    fired: [bool; SCROLL_MILESTONES.len()],
}

impl ScrollMilestones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milestones reached by `percentage` that had not fired yet, ascending.
    /// They are marked fired.
    pub fn cross(&mut self, percentage: f64) -> Vec<u8> {
        let mut crossed = Vec::new();
        for (fired, milestone) in self.fired.iter_mut().zip(SCROLL_MILESTONES) {
            if !*fired && percentage >= f64::from(milestone) {
                *fired = true;
                crossed.push(milestone);
            }
        }
        crossed
    }

    pub fn reset(&mut self) {
        self.fired = Default::default();
    }

    pub fn fired(&self) -> Vec<u8> {
        SCROLL_MILESTONES
            .iter()
            .zip(self.fired)
            .filter_map(|(m, fired)| fired.then_some(*m))
            .collect()
    }
}
