//! Bootstrap from the embedding script tag.
//!
//! A missing or malformed client id disables the agent entirely: no tracker
//! is created, so nothing is installed and nothing touches the network.

use std::rc::Rc;

use glimpse_core::models::DeviceProfile;
use glimpse_core::traits::{Clock, DiagnosticSink, PageContext, Scheduler, SessionStore, Transport};
use glimpse_core::{BootstrapAttributes, Diagnostics, TrackerConfig};

use crate::tracker::Tracker;

/// Platform capabilities a tracker runs on.
#[derive(Clone)]
pub struct Capabilities {
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<dyn Scheduler>,
    pub storage: Rc<dyn SessionStore>,
    pub transport: Rc<dyn Transport>,
    pub page: Rc<dyn PageContext>,
    pub diagnostics: Rc<dyn DiagnosticSink>,
}

impl Tracker {
    /// Start a tracker from script-tag attributes, or `None` when the
    /// configuration is unusable. The reason is reported only in debug mode.
    pub fn bootstrap(
        attrs: &BootstrapAttributes,
        device: DeviceProfile,
        caps: Capabilities,
    ) -> Option<Self> {
        let diagnostics = Diagnostics::new(caps.diagnostics.clone(), attrs.debug_enabled());

        let started = TrackerConfig::from_bootstrap(attrs)
            .and_then(|config| Tracker::new(config, device, caps));

        match started {
            Ok(tracker) => Some(tracker),
            Err(e) => {
                tracing::debug!("bootstrap: agent disabled: {}", e);
                diagnostics.warn(format!("glimpse disabled: {e}"));
                None
            }
        }
    }
}
