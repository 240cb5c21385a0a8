//! EventQueue — insertion-ordered buffer of envelopes awaiting a batch.

use std::collections::VecDeque;

use glimpse_core::models::EventEnvelope;

/// FIFO with a depth bound. Past the bound the oldest envelope is evicted.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<EventEnvelope>,
    max_depth: usize,
}

impl EventQueue {
    pub fn new(max_depth: usize) -> Self {
        Self {
            events: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Append `envelope`; returns the evicted envelope when the bound was hit.
    pub fn push(&mut self, envelope: EventEnvelope) -> Option<EventEnvelope> {
        let evicted = if self.events.len() >= self.max_depth {
            self.events.pop_front()
        } else {
            None
        };
        self.events.push_back(envelope);
        evicted
    }

    /// Remove up to `n` envelopes from the front, preserving order.
    pub fn drain_front(&mut self, n: usize) -> Vec<EventEnvelope> {
        let n = n.min(self.events.len());
        self.events.drain(..n).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
