use std::cell::{Cell, RefCell};

use glimpse_core::errors::TransportError;
use glimpse_core::models::{PostCompletion, PostRequest, RequestId};
use glimpse_core::traits::{BeaconStatus, Transport};

/// One request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Set for POSTs; beacons carry no id.
    pub id: Option<RequestId>,
    pub url: String,
    pub body: String,
    pub keepalive: bool,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Records every beacon and POST; outcomes are scripted by the test.
///
/// POSTs stay outstanding until [`RecordingTransport::take_completions`]
/// answers them, the way a real network answers later.
#[derive(Debug)]
pub struct RecordingTransport {
    beacon_status: Cell<BeaconStatus>,
    fail_posts: Cell<bool>,
    beacons: RefCell<Vec<RecordedRequest>>,
    posts: RefCell<Vec<RecordedRequest>>,
    outstanding: RefCell<Vec<RequestId>>,
}

impl RecordingTransport {
    /// Beacon available and accepting.
    pub fn new() -> Self {
        Self::with_beacon(BeaconStatus::Queued)
    }

    pub fn with_beacon(status: BeaconStatus) -> Self {
        Self {
            beacon_status: Cell::new(status),
            fail_posts: Cell::new(false),
            beacons: RefCell::new(Vec::new()),
            posts: RefCell::new(Vec::new()),
            outstanding: RefCell::new(Vec::new()),
        }
    }

    pub fn set_beacon_status(&self, status: BeaconStatus) {
        self.beacon_status.set(status);
    }

    /// Make every POST answered from now on fail with a network error.
    pub fn set_fail_posts(&self, fail: bool) {
        self.fail_posts.set(fail);
    }

    /// Beacons the platform accepted or rejected, in order.
    pub fn beacons(&self) -> Vec<RecordedRequest> {
        self.beacons.borrow().clone()
    }

    /// POST attempts, successful or not, in order.
    pub fn posts(&self) -> Vec<RecordedRequest> {
        self.posts.borrow().clone()
    }

    /// Bodies that left the page: queued beacons plus every POST attempt.
    pub fn delivered(&self) -> Vec<serde_json::Value> {
        self.beacons
            .borrow()
            .iter()
            .chain(self.posts.borrow().iter())
            .map(RecordedRequest::json)
            .collect()
    }

    /// Answer every outstanding POST, in order, per the scripted outcome.
    pub fn take_completions(&self) -> Vec<PostCompletion> {
        let fail = self.fail_posts.get();
        self.outstanding
            .borrow_mut()
            .drain(..)
            .map(|id| {
                if fail {
                    PostCompletion::failed(
                        id,
                        TransportError::Network {
                            reason: "connection refused".into(),
                        },
                    )
                } else {
                    PostCompletion::succeeded(id)
                }
            })
            .collect()
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.borrow().len()
    }

    pub fn clear(&self) {
        self.beacons.borrow_mut().clear();
        self.posts.borrow_mut().clear();
        self.outstanding.borrow_mut().clear();
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    fn send_beacon(&self, url: &str, body: &str) -> BeaconStatus {
        let status = self.beacon_status.get();
        if status == BeaconStatus::Queued {
            self.beacons.borrow_mut().push(RecordedRequest {
                id: None,
                url: url.to_string(),
                body: body.to_string(),
                keepalive: true,
            });
        }
        status
    }

    fn post(&self, request: PostRequest) {
        self.outstanding.borrow_mut().push(request.id);
        self.posts.borrow_mut().push(RecordedRequest {
            id: Some(request.id),
            url: request.url,
            body: request.body,
            keepalive: request.keepalive,
        });
    }
}
