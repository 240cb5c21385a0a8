//! Collector endpoints, derived from where the agent script was served.

use glimpse_core::constants::{BATCH_ENDPOINT_PATH, SINGLE_ENDPOINT_PATH};
use glimpse_core::errors::ConfigError;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `.../api/collector`
    pub single: String,
    /// `.../api/collector/batch`
    pub batch: String,
}

impl Endpoints {
    /// Resolve both endpoints against the directory of `script_url`.
    pub fn from_script_url(script_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidScriptUrl {
            url: script_url.to_string(),
            reason,
        };

        let script = Url::parse(script_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(script.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", script.scheme())));
        }

        let single = script
            .join(SINGLE_ENDPOINT_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let batch = script
            .join(BATCH_ENDPOINT_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            single: single.into(),
            batch: batch.into(),
        })
    }
}
