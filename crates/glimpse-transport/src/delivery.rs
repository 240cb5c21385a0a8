//! Delivery — beacon first, POST fallback, backoff timers for failed POSTs.
//!
//! POSTs are handed to the transport and tracked as in flight until the host
//! feeds back their [`PostCompletion`]. Nothing here waits on the network.

use std::collections::HashMap;
use std::rc::Rc;

use glimpse_core::models::{
    BatchPayload, PostCompletion, PostRequest, RequestId, RetryId, SinglePayload, Timer,
};
use glimpse_core::traits::{BeaconStatus, Scheduler, Transport};
use glimpse_core::Diagnostics;
use glimpse_observability::{events, DeliveryMetrics};
use serde::Serialize;

use crate::backoff::RetryPolicy;
use crate::endpoints::Endpoints;

/// A POST the transport is working on.
#[derive(Debug)]
struct InFlight {
    url: String,
    body: String,
    /// Retries already made before this attempt.
    retries_made: u32,
}

/// A POST waiting on its backoff timer.
#[derive(Debug)]
struct PendingRetry {
    url: String,
    body: String,
    retries_made: u32,
}

pub struct Delivery {
    transport: Rc<dyn Transport>,
    scheduler: Rc<dyn Scheduler>,
    diagnostics: Diagnostics,
    endpoints: Endpoints,
    policy: RetryPolicy,
    in_flight: HashMap<RequestId, InFlight>,
    pending: HashMap<RetryId, PendingRetry>,
    next_request: u64,
    next_retry: u64,
    metrics: DeliveryMetrics,
}

impl Delivery {
    pub fn new(
        transport: Rc<dyn Transport>,
        scheduler: Rc<dyn Scheduler>,
        diagnostics: Diagnostics,
        endpoints: Endpoints,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            scheduler,
            diagnostics,
            endpoints,
            policy,
            in_flight: HashMap::new(),
            pending: HashMap::new(),
            next_request: 1,
            next_retry: 1,
            metrics: DeliveryMetrics::new(),
        }
    }

    /// Send a batch to `.../api/collector/batch`.
    pub fn send_batch(&mut self, payload: &BatchPayload) {
        if payload.events.is_empty() {
            return;
        }
        self.metrics.batches_sent += 1;
        let url = self.endpoints.batch.clone();
        self.send(url, payload);
    }

    /// Send one event to `.../api/collector`, bypassing the queue.
    pub fn send_single(&mut self, payload: &SinglePayload) {
        self.metrics.singles_sent += 1;
        let url = self.endpoints.single.clone();
        self.send(url, payload);
    }

    /// Backoff elapsed for `id`: POST again.
    pub fn on_retry(&mut self, id: RetryId) {
        let Some(retry) = self.pending.remove(&id) else {
            tracing::debug!("delivery: retry {} no longer pending", id.0);
            return;
        };
        self.post(retry.url, retry.body, retry.retries_made + 1);
    }

    /// The transport finished a POST.
    pub fn on_post_complete(&mut self, completion: PostCompletion) {
        let Some(request) = self.in_flight.remove(&completion.id) else {
            tracing::debug!("delivery: request {} is not in flight", completion.id.0);
            return;
        };
        match completion.outcome {
            Ok(()) => {
                self.metrics.posts_succeeded += 1;
            }
            Err(e) => {
                self.metrics.posts_failed += 1;
                events::delivery_failed(&request.url, request.retries_made + 1, &e.to_string());
                self.schedule_retry(request.url, request.body, request.retries_made);
            }
        }
    }

    /// POSTs handed to the transport whose completion has not come back.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn pending_retries(&self) -> usize {
        self.pending.len()
    }

    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.metrics
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn send<T: Serialize>(&mut self, url: String, payload: &T) {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => {
                self.diagnostics
                    .warn(format!("failed to encode payload for {url}: {e}"));
                return;
            }
        };

        match self.transport.send_beacon(&url, &body) {
            BeaconStatus::Queued => {
                self.metrics.beacon_accepted += 1;
            }
            status @ (BeaconStatus::Rejected | BeaconStatus::Unavailable) => {
                tracing::debug!(?status, "delivery: beacon not used, falling back to POST");
                self.post(url, body, 0);
            }
        }
    }

    /// Hand `body` to the transport; `retries_made` counts the retries before this attempt.
    fn post(&mut self, url: String, body: String, retries_made: u32) {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        let request = PostRequest {
            id,
            url: url.clone(),
            body: body.clone(),
            keepalive: true,
        };
        self.in_flight.insert(
            id,
            InFlight {
                url,
                body,
                retries_made,
            },
        );
        self.transport.post(request);
    }

    fn schedule_retry(&mut self, url: String, body: String, retries_made: u32) {
        let next = retries_made + 1;
        let Some(delay) = self.policy.delay_for(next) else {
            self.metrics.dropped += 1;
            events::batch_dropped(&url, retries_made + 1);
            self.diagnostics.warn(format!(
                "dropping delivery to {url} after {retries_made} retries"
            ));
            return;
        };

        let id = RetryId(self.next_retry);
        self.next_retry += 1;
        self.scheduler.set_timer(delay, Timer::Retry(id));
        self.metrics.retries_scheduled += 1;
        events::retry_scheduled(next, u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self.pending.insert(
            id,
            PendingRetry {
                url,
                body,
                retries_made,
            },
        );
    }
}
