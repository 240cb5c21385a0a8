use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session state persisted in per-tab storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    /// Epoch milliseconds of the last read.
    pub last_touched_at: i64,
    /// Epoch milliseconds of creation. Older records lack it.
    #[serde(default)]
    pub started_at: Option<i64>,
}

impl SessionRecord {
    pub fn new(id: String, now: DateTime<Utc>) -> Self {
        let ms = now.timestamp_millis();
        Self {
            id,
            last_touched_at: ms,
            started_at: Some(ms),
        }
    }

    /// Still inside the sliding idle window.
    pub fn is_active(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now.timestamp_millis().saturating_sub(self.last_touched_at) < timeout.num_milliseconds()
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_touched_at = now.timestamp_millis();
    }

    /// Start of the session, falling back to the last touch for legacy records.
    pub fn started_at_millis(&self) -> i64 {
        self.started_at.unwrap_or(self.last_touched_at)
    }
}
