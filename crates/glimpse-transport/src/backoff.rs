use std::time::Duration;

use glimpse_core::TrackerConfig;

/// Exponential backoff for the POST fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
        }
    }

    /// Delay before retry `k` (1-based): `2^k * base_delay`.
    /// `None` once `k` exceeds the retry budget.
    pub fn delay_for(&self, retry: u32) -> Option<Duration> {
        if retry == 0 || retry > self.max_retries {
            return None;
        }
        let factor = 2u32.checked_pow(retry)?;
        self.base_delay.checked_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}
