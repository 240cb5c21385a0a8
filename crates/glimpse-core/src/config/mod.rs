//! Tracker configuration. Every field has a default, so a partial TOML
//! document or a bare script tag yields a usable config.

pub mod bootstrap;
pub mod defaults;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GlimpseResult};

pub use bootstrap::BootstrapAttributes;

/// Runtime configuration for one tracker instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tenant id sent with every payload. Validated at bootstrap.
    pub client_id: String,
    /// Surface diagnostics through the diagnostic sink.
    pub debug: bool,
    /// URL the agent script was served from; collector endpoints are resolved against it.
    pub endpoint: String,
    /// Events per batch request.
    pub batch_size: usize,
    /// Delay before a partially filled queue is flushed.
    pub flush_interval_ms: u64,
    /// Retries on the POST fallback path.
    pub max_retries: u32,
    /// Base delay of the exponential backoff.
    pub retry_base_delay_ms: u64,
    /// Oldest events are dropped past this depth.
    pub max_queue_depth: usize,
    /// Sliding session idle window.
    pub session_timeout_mins: i64,
    /// Dwell time before the `engaged` event.
    pub engagement_secs: u64,
    /// Scroll evaluation throttle.
    pub scroll_throttle_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            debug: defaults::DEFAULT_DEBUG,
            endpoint: String::new(),
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            flush_interval_ms: defaults::DEFAULT_FLUSH_INTERVAL_MS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: defaults::DEFAULT_RETRY_BASE_DELAY_MS,
            max_queue_depth: defaults::DEFAULT_MAX_QUEUE_DEPTH,
            session_timeout_mins: defaults::DEFAULT_SESSION_TIMEOUT_MINS,
            engagement_secs: defaults::DEFAULT_ENGAGEMENT_SECS,
            scroll_throttle_ms: defaults::DEFAULT_SCROLL_THROTTLE_MS,
        }
    }
}

impl TrackerConfig {
    /// Load from a TOML string. Missing keys fall back to defaults.
    pub fn from_toml(source: &str) -> GlimpseResult<Self> {
        toml::from_str(source).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Build from script-tag attributes. The client id is carried as-is;
    /// validation belongs to the tracker's bootstrap.
    pub fn from_bootstrap(attrs: &BootstrapAttributes) -> GlimpseResult<Self> {
        let client_id = attrs
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingClientId)?;

        Ok(Self {
            client_id: client_id.to_string(),
            debug: attrs.debug_enabled(),
            endpoint: attrs.src.clone(),
            ..Self::default()
        })
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn engagement_delay(&self) -> Duration {
        Duration::from_secs(self.engagement_secs)
    }

    /// The sliding session window. Must be positive and representable.
    pub fn session_timeout(&self) -> Result<chrono::Duration, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            field: "session_timeout_mins",
            reason: reason.to_string(),
        };
        if self.session_timeout_mins <= 0 {
            return Err(invalid("must be positive"));
        }
        chrono::Duration::try_minutes(self.session_timeout_mins)
            .ok_or_else(|| invalid("out of range"))
    }
}
