//! # glimpse-session
//!
//! Identity and session derivation for the tracker.
//!
//! ## Modules
//!
//! - `identity` — low-entropy visitor fingerprint (FNV-1a over device characteristics)
//! - `record` — persisted `{id, lastTouchedAt, startedAt}` session record
//! - `manager` — `SessionManager` with sliding expiration and in-memory fallback

pub mod identity;
pub mod manager;
pub mod record;

pub use identity::{fnv1a_32, visitor_id};
pub use manager::SessionManager;
pub use record::SessionRecord;
