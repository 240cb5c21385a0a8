// Single source of truth for all default values.

use crate::constants;

// --- Batching ---
pub const DEFAULT_BATCH_SIZE: usize = constants::BATCH_SIZE;
pub const DEFAULT_FLUSH_INTERVAL_MS: u64 = constants::FLUSH_INTERVAL_MS;
pub const DEFAULT_MAX_QUEUE_DEPTH: usize = constants::MAX_QUEUE_DEPTH;

// --- Delivery ---
pub const DEFAULT_MAX_RETRIES: u32 = constants::MAX_RETRIES;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = constants::RETRY_BASE_DELAY_MS;

// --- Session ---
pub const DEFAULT_SESSION_TIMEOUT_MINS: i64 = constants::SESSION_TIMEOUT_MINS;

// --- Instrumentation ---
pub const DEFAULT_ENGAGEMENT_SECS: u64 = constants::ENGAGEMENT_SECS;
pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = constants::SCROLL_THROTTLE_MS;

// --- Diagnostics ---
pub const DEFAULT_DEBUG: bool = false;
