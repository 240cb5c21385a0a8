use std::cell::{Cell, RefCell};

use glimpse_core::models::ScrollMetrics;
use glimpse_core::traits::PageContext;

/// A document whose location, title and scroll position the test controls.
#[derive(Debug)]
pub struct FakePage {
    location: RefCell<String>,
    title: RefCell<String>,
    referrer: RefCell<String>,
    scroll: Cell<ScrollMetrics>,
}

impl FakePage {
    pub fn new(location: &str) -> Self {
        Self {
            location: RefCell::new(location.to_string()),
            title: RefCell::new(String::from("Home")),
            referrer: RefCell::new(String::new()),
            scroll: Cell::new(ScrollMetrics {
                scroll_top: 0.0,
                document_height: 2_000.0,
                viewport_height: 1_000.0,
            }),
        }
    }

    /// Change the URL the way `history.pushState` would.
    pub fn navigate(&self, location: &str) {
        *self.location.borrow_mut() = location.to_string();
    }

    pub fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    pub fn set_referrer(&self, referrer: &str) {
        *self.referrer.borrow_mut() = referrer.to_string();
    }

    pub fn set_scroll(&self, metrics: ScrollMetrics) {
        self.scroll.set(metrics);
    }

    /// Scroll so that `percent` of the scrollable depth is reached.
    pub fn scroll_to_percent(&self, percent: f64) {
        let mut m = self.scroll.get();
        m.scroll_top = (m.document_height - m.viewport_height) * percent / 100.0;
        self.scroll.set(m);
    }
}

impl PageContext for FakePage {
    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn referrer(&self) -> String {
        self.referrer.borrow().clone()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll.get()
    }
}
