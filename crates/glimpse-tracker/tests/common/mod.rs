//! Shared harness: a tracker wired to deterministic fakes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use glimpse_core::models::{NavigationKind, PageSignal, Timer};
use glimpse_core::traits::{BeaconStatus, Clock};
use glimpse_core::BootstrapAttributes;
use glimpse_tracker::{Capabilities, Tracker};
use serde_json::Value;
use test_fixtures::{
    desktop_profile, epoch, FakePage, ManualClock, ManualScheduler, MemoryStore, RecordedRequest,
    RecordingSink, RecordingTransport,
};

pub const SCRIPT: &str = "https://cdn.example.com/static/glimpse.js";
pub const PAGE: &str = "https://shop.example.com/products?utm_source=news";
pub const CLIENT_ID: &str = "tenant_0001";

pub struct Fakes {
    pub clock: Rc<ManualClock>,
    pub scheduler: Rc<ManualScheduler>,
    pub store: Rc<MemoryStore>,
    pub transport: Rc<RecordingTransport>,
    pub page: Rc<FakePage>,
    pub sink: Rc<RecordingSink>,
}

impl Fakes {
    pub fn new() -> Self {
        let clock = Rc::new(ManualClock::new(epoch()));
        Self {
            scheduler: Rc::new(ManualScheduler::new(clock.clone())),
            clock,
            store: Rc::new(MemoryStore::new()),
            transport: Rc::new(RecordingTransport::new()),
            page: Rc::new(FakePage::new(PAGE)),
            sink: Rc::new(RecordingSink::new()),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            clock: self.clock.clone(),
            scheduler: self.scheduler.clone(),
            storage: self.store.clone(),
            transport: self.transport.clone(),
            page: self.page.clone(),
            diagnostics: self.sink.clone(),
        }
    }
}

pub fn attributes(client_id: Option<&str>, debug: bool) -> BootstrapAttributes {
    let mut attrs = HashMap::new();
    if let Some(id) = client_id {
        attrs.insert("data-client-id".to_string(), id.to_string());
    }
    if debug {
        attrs.insert("data-debug".to_string(), "true".to_string());
    }
    BootstrapAttributes::from_attributes(SCRIPT, &attrs)
}

pub struct Harness {
    pub fakes: Fakes,
    pub tracker: Tracker,
}

impl Harness {
    /// Tracker in debug mode, beacon accepting.
    pub fn start() -> Self {
        Self::start_with(Fakes::new(), true)
    }

    pub fn start_quiet() -> Self {
        Self::start_with(Fakes::new(), false)
    }

    pub fn start_with_beacon(status: BeaconStatus) -> Self {
        let fakes = Fakes::new();
        fakes.transport.set_beacon_status(status);
        Self::start_with(fakes, true)
    }

    pub fn start_with(fakes: Fakes, debug: bool) -> Self {
        let tracker = Tracker::bootstrap(
            &attributes(Some(CLIENT_ID), debug),
            desktop_profile(),
            fakes.capabilities(),
        )
        .expect("valid client id starts a tracker");
        Self { fakes, tracker }
    }

    pub fn signal(&mut self, signal: PageSignal) {
        self.tracker.handle(signal);
    }

    /// Feed every outstanding POST outcome back to the tracker.
    pub fn complete_posts(&mut self) {
        for completion in self.fakes.transport.take_completions() {
            self.tracker.on_post_complete(completion);
        }
    }

    /// Move the clock forward by `ms`, firing every timer that falls due on the way.
    /// POSTs are answered before time moves and after each timer.
    pub fn advance_ms(&mut self, ms: i64) {
        let until = self.fakes.clock.now() + chrono::Duration::milliseconds(ms);
        self.complete_posts();
        while let Some(due) = self.fakes.scheduler.pop_due(until) {
            self.fakes.clock.set(due.due);
            self.tracker.on_timer(due.timer);
            self.complete_posts();
        }
        self.fakes.clock.set(until);
    }

    /// Fire zero-delay timers.
    pub fn settle(&mut self) {
        self.advance_ms(0);
    }

    pub fn navigate(&mut self, location: &str) {
        self.fakes.page.navigate(location);
        self.signal(PageSignal::Navigation(NavigationKind::PushState));
        self.settle();
    }

    /// Every request that left the page, beacons first then POSTs.
    fn sent(&self) -> Vec<RecordedRequest> {
        let mut sent = self.fakes.transport.beacons();
        sent.extend(self.fakes.transport.posts());
        sent
    }

    pub fn batches(&self) -> Vec<Value> {
        self.sent()
            .iter()
            .filter(|r| r.url.ends_with("/api/collector/batch"))
            .map(RecordedRequest::json)
            .collect()
    }

    pub fn singles(&self) -> Vec<Value> {
        self.sent()
            .iter()
            .filter(|r| r.url.ends_with("/api/collector"))
            .map(RecordedRequest::json)
            .collect()
    }

    /// Events across all delivered batches, in delivery order.
    pub fn batched_events(&self) -> Vec<Value> {
        self.batches()
            .iter()
            .flat_map(|b| b["events"].as_array().cloned().unwrap_or_default())
            .collect()
    }

    pub fn batched_names(&self) -> Vec<String> {
        self.batched_events()
            .iter()
            .map(|e| e["eventName"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.batched_events()
            .into_iter()
            .filter(|e| e["eventName"] == name)
            .collect()
    }

    pub fn flush_timers(&self) -> usize {
        self.fakes
            .scheduler
            .pending_of(|t| matches!(t, Timer::Flush))
            .len()
    }
}
