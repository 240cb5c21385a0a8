//! Request bodies accepted by the collector.

use serde::{Deserialize, Serialize};

use super::envelope::EventEnvelope;

/// Body of `POST .../api/collector/batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPayload {
    pub client_id: String,
    pub visitor_id: String,
    pub session_id: String,
    pub events: Vec<EventEnvelope>,
}

/// Body of `POST .../api/collector`: the envelope flattened alongside identity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SinglePayload {
    #[serde(flatten)]
    pub envelope: EventEnvelope,
    pub client_id: String,
    pub visitor_id: String,
    pub session_id: String,
    pub user_agent: String,
    pub utm: Option<UtmParams>,
}

/// The five standard campaign parameters from the page's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl UtmParams {
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.medium.is_none()
            && self.campaign.is_none()
            && self.term.is_none()
            && self.content.is_none()
    }
}
