use crate::models::PostRequest;

/// Outcome of a beacon hand-off, reported synchronously by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconStatus {
    /// Accepted for background delivery.
    Queued,
    /// The platform refused the payload (size, quota).
    Rejected,
    /// No beacon mechanism on this platform.
    Unavailable,
}

/// Network delivery of JSON bodies. Neither call may block the caller.
pub trait Transport {
    /// Fire-and-forget send that survives page teardown.
    fn send_beacon(&self, url: &str, body: &str) -> BeaconStatus;

    /// Start a `POST` with `Content-Type: application/json` and return at once.
    /// The host reports the outcome later as a
    /// [`PostCompletion`](crate::models::PostCompletion) carrying `request.id`.
    fn post(&self, request: PostRequest);
}
