use serde::{Deserialize, Serialize};

/// One observation, fully contextualized at capture time.
///
/// Every string field is sanitized and length-capped before the envelope is
/// built. `data` is the caller's payload and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub event_name: String,
    pub url: String,
    pub page_title: String,
    pub referrer: String,
    pub device: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub language: String,
    pub timezone: String,
    /// Capture time, epoch milliseconds.
    pub timestamp: i64,
    /// Seconds since the session started.
    pub session_duration: u64,
    pub data: serde_json::Value,
}
