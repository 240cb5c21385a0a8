//! Envelope construction. Every context string is sanitized here, once.

use std::rc::Rc;

use glimpse_core::constants::{
    MAX_EVENT_NAME_LEN, MAX_LANGUAGE_LEN, MAX_TIMEZONE_LEN, MAX_TITLE_LEN,
};
use glimpse_core::models::{DeviceClass, DeviceProfile, EventEnvelope};
use glimpse_core::traits::PageContext;
use glimpse_privacy::{sanitize, sanitize_url};

pub struct EnvelopeBuilder {
    page: Rc<dyn PageContext>,
    device: DeviceProfile,
    device_class: DeviceClass,
}

impl EnvelopeBuilder {
    pub fn new(page: Rc<dyn PageContext>, device: DeviceProfile) -> Self {
        let device_class = device.device_class();
        Self {
            page,
            device,
            device_class,
        }
    }

    /// Build an envelope for the page at `location`. `data` passes through as-is.
    pub fn build(
        &self,
        name: &str,
        data: serde_json::Value,
        location: &str,
        timestamp: i64,
        session_duration: u64,
    ) -> EventEnvelope {
        EventEnvelope {
            event_name: sanitize(name, MAX_EVENT_NAME_LEN),
            url: sanitize_url(location, location),
            page_title: sanitize(&self.page.title(), MAX_TITLE_LEN),
            referrer: sanitize_url(&self.page.referrer(), location),
            device: self.device_class.as_str().to_string(),
            screen_width: self.device.screen_width,
            screen_height: self.device.screen_height,
            language: sanitize(&self.device.language, MAX_LANGUAGE_LEN),
            timezone: sanitize(&self.device.timezone, MAX_TIMEZONE_LEN),
            timestamp,
            session_duration,
            data,
        }
    }

    pub fn device(&self) -> &DeviceProfile {
        &self.device
    }
}
