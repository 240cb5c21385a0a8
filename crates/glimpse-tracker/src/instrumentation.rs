//! Reactions to page signals and elapsed timers.
//!
//! The host adapter forwards every observed [`PageSignal`] to
//! [`Tracker::handle`] and every elapsed [`Timer`] to [`Tracker::on_timer`].

use std::time::Duration;

use glimpse_core::constants::{
    EVENT_ENGAGED, EVENT_JS_ERROR, EVENT_OUTBOUND_CLICK, EVENT_PERFORMANCE, EVENT_PROMISE_ERROR,
    EVENT_SCROLL_DEPTH, EVENT_TIME_ON_PAGE, MAX_ERROR_FILENAME_LEN, MAX_ERROR_MESSAGE_LEN,
    MAX_LINK_TEXT_LEN,
};
use glimpse_core::models::{Anchor, ErrorReport, NavigationTiming, PageSignal, Timer};
use glimpse_observability::events;
use glimpse_privacy::{host_of, sanitize, sanitize_url};
use serde_json::{json, Map, Value};

use crate::lifecycle::PagePhase;
use crate::tracker::Tracker;

impl Tracker {
    /// React to one platform signal.
    pub fn handle(&mut self, signal: PageSignal) {
        match signal {
            PageSignal::Navigation(kind) => {
                tracing::trace!(?kind, "instrumentation: navigation observed");
                // Route changes inside one tick settle together.
                if self.route_timer.is_none() {
                    let id = self.scheduler.set_timer(Duration::ZERO, Timer::RouteSettle);
                    self.route_timer = Some(id);
                }
            }
            PageSignal::Scroll => {
                if self.scroll_timer.is_none() {
                    let id = self
                        .scheduler
                        .set_timer(self.config.scroll_throttle(), Timer::ScrollThrottle);
                    self.scroll_timer = Some(id);
                }
            }
            PageSignal::Loaded(timing) => self.on_loaded(timing),
            PageSignal::Click(Some(anchor)) => self.on_click(anchor),
            PageSignal::Click(None) => {}
            PageSignal::Error(report) => self.on_error(report),
            PageSignal::UnhandledRejection(reason) => {
                let message = sanitize(&reason, MAX_ERROR_MESSAGE_LEN);
                let envelope = self.capture(EVENT_PROMISE_ERROR, json!({ "message": message }));
                self.enqueue(envelope);
            }
            PageSignal::VisibilityHidden | PageSignal::BeforeUnload => self.leave_page(),
            PageSignal::VisibilityVisible => self.resume_page(),
        }
    }

    /// A timer armed by this tracker elapsed.
    pub fn on_timer(&mut self, timer: Timer) {
        tracing::trace!(%timer, "instrumentation: timer elapsed");
        match timer {
            Timer::Flush => {
                if let Some(events) = self.batcher.on_flush_timer() {
                    self.send_batch(events);
                }
            }
            Timer::Retry(id) => self.delivery.on_retry(id),
            Timer::RouteSettle => {
                self.route_timer = None;
                self.on_route_settled();
            }
            Timer::ScrollThrottle => {
                self.scroll_timer = None;
                self.evaluate_scroll();
            }
            Timer::Engagement => {
                self.page_view.engagement_timer = None;
                if self.page_view.engage() {
                    let seconds = self.page_view.seconds_on_page(self.clock.now());
                    events::page_transition(
                        PagePhase::NewPage.as_str(),
                        PagePhase::Engaged.as_str(),
                        &self.page_view.location,
                    );
                    let envelope = self.capture(EVENT_ENGAGED, json!({ "seconds": seconds }));
                    self.enqueue(envelope);
                }
            }
        }
    }

    /// Enter `Leaving`: flush the queue and send the page's duration now.
    fn leave_page(&mut self) {
        let from = self.page_view.leave();
        events::page_transition(
            from.as_str(),
            PagePhase::Leaving.as_str(),
            &self.page_view.location,
        );

        self.flush();

        let seconds = self.page_view.seconds_on_page(self.clock.now());
        let envelope = self.capture(EVENT_TIME_ON_PAGE, json!({ "seconds": seconds }));
        self.send_single(envelope);
    }

    /// Back from `Leaving`. An engagement timer that elapsed while the page was
    /// hidden is re-armed for whatever part of the delay is left.
    fn resume_page(&mut self) {
        let Some(to) = self.page_view.resume() else {
            return;
        };
        events::page_transition(
            PagePhase::Leaving.as_str(),
            to.as_str(),
            &self.page_view.location,
        );

        if to == PagePhase::NewPage && self.page_view.engagement_timer.is_none() {
            let elapsed = (self.clock.now() - self.page_view.started_at)
                .to_std()
                .unwrap_or_default();
            let remaining = self.config.engagement_delay().saturating_sub(elapsed);
            let id = self.scheduler.set_timer(remaining, Timer::Engagement);
            self.page_view.engagement_timer = Some(id);
        }
    }

    fn on_route_settled(&mut self) {
        let location = self.page.location();
        if location == self.page_view.location {
            return;
        }

        self.leave_page();

        if let Some(id) = self.page_view.engagement_timer.take() {
            self.scheduler.clear_timer(id);
        }
        self.page_view.restart(location, self.clock.now());
        events::page_transition(
            PagePhase::Leaving.as_str(),
            PagePhase::NewPage.as_str(),
            &self.page_view.location,
        );
        self.diagnostics
            .log(format!("page view: {}", self.page_view.location));
        self.begin_page_view();
    }

    fn evaluate_scroll(&mut self) {
        let percentage = self.page.scroll_metrics().percentage();
        for depth in self.page_view.milestones.cross(percentage) {
            let envelope = self.capture(EVENT_SCROLL_DEPTH, json!({ "depth": depth }));
            self.enqueue(envelope);
        }
    }

    fn on_click(&mut self, anchor: Anchor) {
        let url = sanitize_url(&anchor.href, &self.page_view.location);
        let Some(link_host) = host_of(&url) else {
            return;
        };
        if host_of(&self.page_view.location).as_deref() == Some(link_host.as_str()) {
            return;
        }

        let text = sanitize(anchor.text.trim(), MAX_LINK_TEXT_LEN);
        let envelope = self.capture(EVENT_OUTBOUND_CLICK, json!({ "url": url, "text": text }));
        self.enqueue(envelope);
    }

    fn on_error(&mut self, report: ErrorReport) {
        let data = json!({
            "message": sanitize(&report.message, MAX_ERROR_MESSAGE_LEN),
            "filename": sanitize(&report.filename, MAX_ERROR_FILENAME_LEN),
            "line": report.line,
            "column": report.column,
        });
        let envelope = self.capture(EVENT_JS_ERROR, data);
        self.enqueue(envelope);
    }

    fn on_loaded(&mut self, timing: NavigationTiming) {
        if self.load_reported {
            return;
        }
        self.load_reported = true;

        let mut data = Map::new();
        let marks = [
            ("ttfb", timing.ttfb_ms()),
            ("domReady", timing.dom_ready_ms()),
            ("loadTime", timing.load_ms()),
        ];
        for (key, value) in marks {
            if let Some(ms) = value {
                data.insert(key.to_string(), Value::from(ms));
            }
        }
        let envelope = self.capture(EVENT_PERFORMANCE, Value::Object(data));
        self.enqueue(envelope);
    }
}
