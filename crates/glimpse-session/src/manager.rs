//! SessionManager — sliding-expiration session ids over per-tab storage.
//!
//! Storage is the source of truth while it works. When it fails (private
//! browsing, disabled storage) the manager keeps the record in memory for the
//! rest of the page load and never surfaces the error.

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use glimpse_core::constants::SESSION_STORAGE_KEY;
use glimpse_core::encoding::to_base36;
use glimpse_core::errors::{GlimpseResult, StorageError};
use glimpse_core::traits::{Clock, SessionStore};
use glimpse_core::Diagnostics;
use glimpse_observability::events;

use crate::record::SessionRecord;

/// Length of the random tail of a session id.
const SESSION_SUFFIX_LEN: usize = 9;

pub struct SessionManager {
    store: Rc<dyn SessionStore>,
    clock: Rc<dyn Clock>,
    diagnostics: Diagnostics,
    timeout: Duration,
    /// Last record seen or written; authoritative only when storage fails.
    memory: Option<SessionRecord>,
}

impl SessionManager {
    pub fn new(
        store: Rc<dyn SessionStore>,
        clock: Rc<dyn Clock>,
        diagnostics: Diagnostics,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            diagnostics,
            timeout,
            memory: None,
        }
    }

    /// Current session id. Every read slides the expiration window; an expired
    /// or missing session is replaced by a fresh one.
    pub fn session_id(&mut self) -> String {
        self.current().id
    }

    /// Whole seconds since the current session started.
    pub fn session_duration(&mut self) -> u64 {
        let now = self.clock.now();
        let record = self.current();
        let elapsed = now.timestamp_millis() - record.started_at_millis();
        u64::try_from(elapsed / 1_000).unwrap_or(0)
    }

    fn current(&mut self) -> SessionRecord {
        let now = self.clock.now();
        let record = match self.load() {
            Some(mut record) if record.is_active(now, self.timeout) => {
                if record.started_at.is_none() {
                    record.started_at = Some(record.last_touched_at);
                }
                record.touch(now);
                record
            }
            previous => {
                let record = SessionRecord::new(new_session_id(now), now);
                events::session_rotated(&record.id, previous.is_some());
                record
            }
        };

        if let Err(e) = self.persist(&record) {
            self.diagnostics
                .warn(format!("session storage unavailable, keeping session in memory: {e}"));
        }
        self.memory = Some(record.clone());
        record
    }

    fn load(&self) -> Option<SessionRecord> {
        match self.store.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => Some(self.fresher(record)),
                Err(e) => {
                    let err = StorageError::Corrupt {
                        key: SESSION_STORAGE_KEY.to_string(),
                        reason: e.to_string(),
                    };
                    self.diagnostics.warn(format!("discarding session record: {err}"));
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("session: storage read failed: {e}");
                self.memory.clone()
            }
        }
    }

    /// A write that failed after a successful read leaves storage stale.
    fn fresher(&self, stored: SessionRecord) -> SessionRecord {
        match &self.memory {
            Some(mem) if mem.last_touched_at > stored.last_touched_at => mem.clone(),
            _ => stored,
        }
    }

    fn persist(&self, record: &SessionRecord) -> GlimpseResult<()> {
        let raw = serde_json::to_string(record)?;
        self.store.set(SESSION_STORAGE_KEY, &raw)?;
        Ok(())
    }
}

/// `ses_` + base-36 epoch millis + random base-36 tail.
fn new_session_id(now: DateTime<Utc>) -> String {
    let millis = u128::try_from(now.timestamp_millis()).unwrap_or(0);
    let random = to_base36(uuid::Uuid::new_v4().as_u128());
    let suffix: String = random.chars().take(SESSION_SUFFIX_LEN).collect();
    format!("ses_{}{}", to_base36(millis), suffix)
}
