//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log an event accepted into the queue.
pub fn event_enqueued(event_name: &str, queue_len: usize) {
    tracing::debug!(
        event = "event_enqueued",
        event_name = %event_name,
        queue_len = queue_len,
        "event enqueued"
    );
}

/// Log a batch handed to the transport.
pub fn batch_flushed(events: usize, remaining: usize) {
    tracing::debug!(
        event = "batch_flushed",
        events = events,
        remaining = remaining,
        "batch flushed"
    );
}

/// Log a failed POST delivery.
pub fn delivery_failed(url: &str, attempt: u32, reason: &str) {
    tracing::warn!(
        event = "delivery_failed",
        url = %url,
        attempt = attempt,
        reason = %reason,
        "delivery failed"
    );
}

/// Log a retry put on its backoff timer.
pub fn retry_scheduled(retry: u32, delay_ms: u64) {
    tracing::debug!(
        event = "retry_scheduled",
        retry = retry,
        delay_ms = delay_ms,
        "retry scheduled"
    );
}

/// Log a delivery abandoned after exhausting retries.
pub fn batch_dropped(url: &str, attempts: u32) {
    tracing::warn!(
        event = "batch_dropped",
        url = %url,
        attempts = attempts,
        "delivery dropped after retries"
    );
}

/// Log an event evicted because the queue hit its depth bound.
pub fn queue_overflow(dropped_event: &str, max_depth: usize) {
    tracing::warn!(
        event = "queue_overflow",
        dropped_event = %dropped_event,
        max_depth = max_depth,
        "queue full, oldest event dropped"
    );
}

/// Log a page-view transition.
pub fn page_transition(from: &str, to: &str, url: &str) {
    tracing::debug!(
        event = "page_transition",
        from = %from,
        to = %to,
        url = %url,
        "page view transition"
    );
}

/// Log a new session replacing a missing or expired one.
pub fn session_rotated(session_id: &str, expired: bool) {
    tracing::debug!(
        event = "session_rotated",
        session_id = %session_id,
        expired = expired,
        "session rotated"
    );
}
