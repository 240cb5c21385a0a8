//! Script-tag bootstrap attributes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attributes read from the embedding `<script>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapAttributes {
    /// Absolute URL the script was served from.
    pub src: String,
    /// `data-client-id`.
    pub client_id: Option<String>,
    /// `data-debug`.
    pub debug: Option<String>,
}

impl BootstrapAttributes {
    /// Build from the script's `src` and its raw attribute map.
    pub fn from_attributes(src: impl Into<String>, attrs: &HashMap<String, String>) -> Self {
        Self {
            src: src.into(),
            client_id: attrs.get("data-client-id").cloned(),
            debug: attrs.get("data-debug").cloned(),
        }
    }

    /// `data-debug` is on only when it reads `true`.
    pub fn debug_enabled(&self) -> bool {
        self.debug
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}
