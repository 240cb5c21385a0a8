//! Deterministic fakes for Glimpse's injected capabilities.
//!
//! Every fake uses interior mutability so a test can keep an `Rc` handle,
//! give a clone to the engine, and inspect or steer it afterwards.

mod clock;
mod page;
mod scheduler;
mod sink;
mod store;
mod transport;

pub use clock::ManualClock;
pub use page::FakePage;
pub use scheduler::{ManualScheduler, ScheduledTimer};
pub use sink::RecordingSink;
pub use store::MemoryStore;
pub use transport::{RecordedRequest, RecordingTransport};

use chrono::{DateTime, TimeZone, Utc};
use glimpse_core::models::DeviceProfile;

/// Fixed start instant used by fixtures: 2023-11-14T22:13:20Z.
pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_000_000)
        .single()
        .expect("fixture epoch is a valid timestamp")
}

/// A desktop Chrome on Linux.
pub fn desktop_profile() -> DeviceProfile {
    DeviceProfile {
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
            .to_string(),
        language: "en-US".to_string(),
        screen_width: 1920,
        screen_height: 1080,
        color_depth: 24,
        timezone: "Europe/Berlin".to_string(),
        timezone_offset_minutes: -60,
        hardware_concurrency: 8,
        max_touch_points: 0,
        platform: "Linux x86_64".to_string(),
    }
}

/// An iPhone.
pub fn mobile_profile() -> DeviceProfile {
    DeviceProfile {
        user_agent:
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
                .to_string(),
        language: "de-DE".to_string(),
        screen_width: 390,
        screen_height: 844,
        color_depth: 32,
        timezone: "Europe/Berlin".to_string(),
        timezone_offset_minutes: -60,
        hardware_concurrency: 6,
        max_touch_points: 5,
        platform: "iPhone".to_string(),
    }
}
