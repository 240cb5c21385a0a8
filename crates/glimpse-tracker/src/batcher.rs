//! Batcher — decides when queued envelopes leave as a batch.
//!
//! A full batch flushes immediately. Otherwise the first envelope of a cycle
//! arms the flush timer. At most one flush timer is armed at a time, and
//! every flush cancels it before draining.

use std::rc::Rc;
use std::time::Duration;

use glimpse_core::models::{EventEnvelope, Timer, TimerId};
use glimpse_core::traits::Scheduler;
use glimpse_observability::{events, QueueMetrics};

use crate::queue::EventQueue;

pub struct Batcher {
    queue: EventQueue,
    batch_size: usize,
    flush_interval: Duration,
    scheduler: Rc<dyn Scheduler>,
    flush_timer: Option<TimerId>,
    metrics: QueueMetrics,
}

impl Batcher {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        batch_size: usize,
        flush_interval: Duration,
        max_depth: usize,
    ) -> Self {
        Self {
            queue: EventQueue::new(max_depth),
            batch_size: batch_size.max(1),
            flush_interval,
            scheduler,
            flush_timer: None,
            metrics: QueueMetrics::new(),
        }
    }

    /// Queue `envelope`. Returns a batch to send when this filled one.
    pub fn enqueue(&mut self, envelope: EventEnvelope) -> Option<Vec<EventEnvelope>> {
        let name = envelope.event_name.clone();
        if let Some(evicted) = self.queue.push(envelope) {
            self.metrics.overflowed += 1;
            events::queue_overflow(&evicted.event_name, self.queue.max_depth());
        }
        self.metrics.enqueued += 1;
        events::event_enqueued(&name, self.queue.len());

        if self.queue.len() >= self.batch_size {
            return self.flush();
        }
        if self.flush_timer.is_none() {
            self.arm();
        }
        None
    }

    /// Cancel the flush timer and drain up to one batch from the front.
    /// Re-arms the timer when envelopes remain.
    pub fn flush(&mut self) -> Option<Vec<EventEnvelope>> {
        self.cancel_timer();
        if self.queue.is_empty() {
            return None;
        }

        let batch = self.queue.drain_front(self.batch_size);
        self.metrics.flushes += 1;
        events::batch_flushed(batch.len(), self.queue.len());

        if !self.queue.is_empty() {
            self.arm();
        }
        Some(batch)
    }

    /// The flush timer elapsed.
    pub fn on_flush_timer(&mut self) -> Option<Vec<EventEnvelope>> {
        // Already fired; nothing to clear.
        self.flush_timer = None;
        self.flush()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn timer_armed(&self) -> bool {
        self.flush_timer.is_some()
    }

    pub fn metrics(&self) -> &QueueMetrics {
        &self.metrics
    }

    /// Count an envelope refused before reaching the queue.
    pub fn record_refused(&mut self) {
        self.metrics.refused_without_consent += 1;
    }

    fn arm(&mut self) {
        let id = self.scheduler.set_timer(self.flush_interval, Timer::Flush);
        self.flush_timer = Some(id);
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.flush_timer.take() {
            self.scheduler.clear_timer(id);
        }
    }
}
