use serde::{Deserialize, Serialize};

/// Coarse device and browser characteristics, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub language: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub color_depth: u32,
    /// IANA zone name, e.g. `Europe/Berlin`.
    pub timezone: String,
    /// `Date.getTimezoneOffset()` semantics: minutes behind UTC.
    pub timezone_offset_minutes: i32,
    pub hardware_concurrency: u32,
    pub max_touch_points: u32,
    pub platform: String,
}

impl DeviceProfile {
    /// Characteristics that feed the visitor fingerprint, in hashing order.
    pub fn characteristics(&self) -> Vec<String> {
        vec![
            self.user_agent.clone(),
            self.language.clone(),
            format!(
                "{}x{}x{}",
                self.screen_width, self.screen_height, self.color_depth
            ),
            self.timezone_offset_minutes.to_string(),
            self.hardware_concurrency.to_string(),
            self.max_touch_points.to_string(),
            self.platform.clone(),
        ]
    }

    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_user_agent(&self.user_agent)
    }
}

/// Form factor reported in the envelope's `device` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classify by user-agent markers. Tablet markers win over mobile ones;
    /// Android without `Mobi` is a tablet.
    pub fn from_user_agent(ua: &str) -> Self {
        let is_android = ua.contains("Android");
        let has_mobi = ua.contains("Mobi");
        if ua.contains("iPad") || ua.contains("Tablet") || (is_android && !has_mobi) {
            Self::Tablet
        } else if has_mobi || is_android || ua.contains("iPhone") || ua.contains("iPod") {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}
