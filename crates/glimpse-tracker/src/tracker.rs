//! Tracker — one instance per embedding context.
//!
//! Public operations are synchronous and only touch the queue; delivery
//! happens on flush. No error ever reaches the caller.

use std::rc::Rc;

use glimpse_core::constants::{
    DEFAULT_MAX_LEN, EVENT_IDENTIFY, EVENT_PAGE_VIEW, MAX_EVENT_NAME_LEN, MAX_USER_ID_LEN,
};
use glimpse_core::errors::{ConfigError, GlimpseResult};
use glimpse_core::models::{
    BatchPayload, DeviceProfile, EventEnvelope, PostCompletion, SinglePayload, Timer, TimerId,
};
use glimpse_core::traits::{Clock, PageContext, Scheduler};
use glimpse_core::{Diagnostics, TrackerConfig};
use glimpse_observability::{DeliveryMetrics, QueueMetrics};
use glimpse_privacy::{extract_utm, is_valid_client_id, sanitize};
use glimpse_session::{visitor_id, SessionManager};
use glimpse_transport::{Delivery, Endpoints, RetryPolicy};
use serde::Serialize;
use serde_json::{json, Value};

use crate::batcher::Batcher;
use crate::bootstrap::Capabilities;
use crate::envelope::EnvelopeBuilder;
use crate::lifecycle::{PagePhase, PageView};

/// Snapshot of the tracker's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackerMetrics {
    pub queue: QueueMetrics,
    pub delivery: DeliveryMetrics,
}

pub struct Tracker {
    pub(crate) config: TrackerConfig,
    pub(crate) clock: Rc<dyn Clock>,
    pub(crate) scheduler: Rc<dyn Scheduler>,
    pub(crate) page: Rc<dyn PageContext>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) visitor_id: String,
    pub(crate) session: SessionManager,
    pub(crate) batcher: Batcher,
    pub(crate) delivery: Delivery,
    pub(crate) builder: EnvelopeBuilder,
    pub(crate) page_view: PageView,
    pub(crate) scroll_timer: Option<TimerId>,
    pub(crate) route_timer: Option<TimerId>,
    pub(crate) load_reported: bool,
    pub(crate) consent: bool,
}

impl Tracker {
    /// Validate `config`, wire the components, and record the initial page view.
    pub fn new(
        config: TrackerConfig,
        device: DeviceProfile,
        caps: Capabilities,
    ) -> GlimpseResult<Self> {
        if !is_valid_client_id(&config.client_id) {
            return Err(ConfigError::InvalidClientId {
                client_id: config.client_id.clone(),
            }
            .into());
        }
        let endpoints = Endpoints::from_script_url(&config.endpoint)?;
        let session_timeout = config.session_timeout()?;

        let diagnostics = Diagnostics::new(caps.diagnostics, config.debug);
        let session = SessionManager::new(
            caps.storage,
            caps.clock.clone(),
            diagnostics.clone(),
            session_timeout,
        );
        let delivery = Delivery::new(
            caps.transport,
            caps.scheduler.clone(),
            diagnostics.clone(),
            endpoints,
            RetryPolicy::from_config(&config),
        );
        let batcher = Batcher::new(
            caps.scheduler.clone(),
            config.batch_size,
            config.flush_interval(),
            config.max_queue_depth,
        );
        let page_view = PageView::new(caps.page.location(), caps.clock.now());

        let mut tracker = Self {
            visitor_id: visitor_id(&device),
            builder: EnvelopeBuilder::new(caps.page.clone(), device),
            clock: caps.clock,
            scheduler: caps.scheduler,
            page: caps.page,
            diagnostics,
            session,
            batcher,
            delivery,
            page_view,
            scroll_timer: None,
            route_timer: None,
            load_reported: false,
            consent: true,
            config,
        };

        tracker.diagnostics.log(format!(
            "glimpse initialized for client {} (visitor {})",
            tracker.config.client_id, tracker.visitor_id
        ));
        tracker.begin_page_view();
        Ok(tracker)
    }

    // --- Public API ---

    /// Record a custom event. `data` is forwarded untouched.
    pub fn track(&mut self, name: &str, data: Value) {
        if sanitize(name, MAX_EVENT_NAME_LEN).trim().is_empty() {
            self.diagnostics.warn("track: ignoring event without a name");
            return;
        }
        let envelope = self.capture(name, data);
        self.enqueue(envelope);
    }

    /// Associate the visitor with an application user id.
    pub fn identify(&mut self, user_id: &str, traits: Value) {
        let user_id = sanitize(user_id.trim(), MAX_USER_ID_LEN);
        if user_id.is_empty() {
            self.diagnostics.warn("identify: ignoring empty user id");
            return;
        }
        let envelope = self.capture(EVENT_IDENTIFY, json!({ "userId": user_id, "traits": traits }));
        self.enqueue(envelope);
    }

    pub fn visitor_id(&self) -> &str {
        &self.visitor_id
    }

    /// Current session id; reading it extends the session.
    pub fn session_id(&mut self) -> String {
        self.session.session_id()
    }

    /// Seconds since the session started.
    pub fn session_duration(&mut self) -> u64 {
        self.session.session_duration()
    }

    /// Gate future events. Already-queued events are unaffected.
    pub fn consent(&mut self, granted: bool) {
        self.consent = granted;
        self.diagnostics
            .log(format!("consent {}", if granted { "granted" } else { "revoked" }));
    }

    /// A POST handed to the transport finished. Failures go on the retry
    /// backoff; the host calls this for every completion its transport reports.
    pub fn on_post_complete(&mut self, completion: PostCompletion) {
        self.delivery.on_post_complete(completion);
    }

    pub fn has_consent(&self) -> bool {
        self.consent
    }

    /// Send one batch now, cancelling the pending flush timer.
    pub fn flush(&mut self) {
        if let Some(events) = self.batcher.flush() {
            self.send_batch(events);
        }
    }

    /// Toggle diagnostic output.
    pub fn debug(&mut self, enable: bool) {
        self.diagnostics.set_enabled(enable);
        self.diagnostics.log("debug mode enabled");
    }

    pub fn is_debug(&self) -> bool {
        self.diagnostics.is_enabled()
    }

    pub fn queue_len(&self) -> usize {
        self.batcher.len()
    }

    pub fn page_phase(&self) -> PagePhase {
        self.page_view.phase
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn metrics(&self) -> TrackerMetrics {
        TrackerMetrics {
            queue: self.batcher.metrics().clone(),
            delivery: self.delivery.metrics().clone(),
        }
    }

    // --- Internals shared with instrumentation ---

    /// Envelope for the current page view, stamped now.
    pub(crate) fn capture(&mut self, name: &str, data: Value) -> EventEnvelope {
        let timestamp = self.clock.now().timestamp_millis();
        let session_duration = self.session.session_duration();
        self.builder.build(
            name,
            data,
            &self.page_view.location,
            timestamp,
            session_duration,
        )
    }

    pub(crate) fn enqueue(&mut self, envelope: EventEnvelope) {
        if !self.consent {
            self.batcher.record_refused();
            return;
        }
        if let Some(events) = self.batcher.enqueue(envelope) {
            self.send_batch(events);
        }
    }

    /// Deliver one envelope immediately, outside the batch cycle.
    pub(crate) fn send_single(&mut self, envelope: EventEnvelope) {
        if !self.consent {
            self.batcher.record_refused();
            return;
        }
        let payload = SinglePayload {
            envelope,
            client_id: self.config.client_id.clone(),
            visitor_id: self.visitor_id.clone(),
            session_id: self.session.session_id(),
            user_agent: sanitize(&self.builder.device().user_agent, DEFAULT_MAX_LEN),
            utm: extract_utm(&self.page_view.location),
        };
        self.delivery.send_single(&payload);
    }

    pub(crate) fn send_batch(&mut self, events: Vec<EventEnvelope>) {
        let payload = BatchPayload {
            client_id: self.config.client_id.clone(),
            visitor_id: self.visitor_id.clone(),
            session_id: self.session.session_id(),
            events,
        };
        self.delivery.send_batch(&payload);
    }

    /// Enter `NewPage` for the current page view: arm the engagement timer
    /// and record the `page_view`.
    pub(crate) fn begin_page_view(&mut self) {
        let timer = self
            .scheduler
            .set_timer(self.config.engagement_delay(), Timer::Engagement);
        self.page_view.engagement_timer = Some(timer);

        let envelope = self.capture(EVENT_PAGE_VIEW, json!({}));
        self.enqueue(envelope);
    }
}
