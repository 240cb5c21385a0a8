//! Native HTTP transport: a dedicated worker thread drives `reqwest`'s
//! blocking client, fed through a bounded channel.
//!
//! [`Transport::post`] only enqueues the request. Completions collect on a
//! second channel; the host drains them with [`HttpTransport::poll_completions`]
//! and hands each one to the tracker.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use glimpse_core::errors::{GlimpseResult, TransportError};
use glimpse_core::models::{PostCompletion, PostRequest};
use glimpse_core::traits::{BeaconStatus, Transport};
use reqwest::header::CONTENT_TYPE;

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Compress responses.
    pub gzip: bool,
    /// Requests waiting for the worker before new ones fail fast.
    pub queue_capacity: usize,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            gzip: true,
            queue_capacity: 1024,
        }
    }
}

/// Transport for hosts without a beacon mechanism. `keepalive` has no
/// meaning outside a browser and is ignored.
#[derive(Debug)]
pub struct HttpTransport {
    requests: Sender<PostRequest>,
    completions_tx: Sender<PostCompletion>,
    completions: Receiver<PostCompletion>,
}

impl HttpTransport {
    /// Build the client and start the worker thread. The worker exits once
    /// the transport is dropped and its queue is drained.
    pub fn new(config: HttpTransportConfig) -> GlimpseResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(config.gzip)
            .build()
            .map_err(|e| TransportError::Unavailable {
                reason: e.to_string(),
            })?;

        let (requests, inbox) =
            crossbeam_channel::bounded::<PostRequest>(config.queue_capacity.max(1));
        let (completions_tx, completions) = crossbeam_channel::unbounded();

        let outbox = completions_tx.clone();
        thread::Builder::new()
            .name("glimpse-http".into())
            .spawn(move || {
                for request in inbox {
                    let outcome = send(&client, &request);
                    if outbox.send(PostCompletion { id: request.id, outcome }).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| TransportError::Unavailable {
                reason: format!("failed to start http worker: {e}"),
            })?;

        Ok(Self {
            requests,
            completions_tx,
            completions,
        })
    }

    /// Completions that arrived since the last poll, in arrival order.
    pub fn poll_completions(&self) -> Vec<PostCompletion> {
        self.completions.try_iter().collect()
    }

    /// Wait up to `timeout` for the next completion.
    pub fn wait_completion(&self, timeout: Duration) -> Option<PostCompletion> {
        match self.completions.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Transport for HttpTransport {
    fn send_beacon(&self, _url: &str, _body: &str) -> BeaconStatus {
        BeaconStatus::Unavailable
    }

    fn post(&self, request: PostRequest) {
        let (request, reason) = match self.requests.try_send(request) {
            Ok(()) => return,
            Err(TrySendError::Full(request)) => (request, "request queue full"),
            Err(TrySendError::Disconnected(request)) => (request, "http worker stopped"),
        };
        tracing::debug!(url = %request.url, reason, "http: request not accepted");
        let completion = PostCompletion::failed(
            request.id,
            TransportError::Unavailable {
                reason: reason.to_string(),
            },
        );
        // The receiving half lives in `self`, so this cannot fail.
        let _ = self.completions_tx.send(completion);
    }
}

fn send(client: &reqwest::blocking::Client, request: &PostRequest) -> Result<(), TransportError> {
    let response = client
        .post(&request.url)
        .header(CONTENT_TYPE, "application/json")
        .body(request.body.clone())
        .send()
        .map_err(|e| TransportError::Network {
            reason: e.to_string(),
        })?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Status {
            status: status.as_u16(),
        })
    }
}
