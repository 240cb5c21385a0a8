//! Campaign parameter extraction.

use glimpse_core::constants::MAX_UTM_LEN;
use glimpse_core::models::UtmParams;
use url::Url;

use crate::sanitizer::sanitize;

/// Read `utm_source`, `utm_medium`, `utm_campaign`, `utm_term` and
/// `utm_content` from the query string of `page_url`. `None` when none is present.
pub fn extract_utm(page_url: &str) -> Option<UtmParams> {
    let url = Url::parse(page_url).ok()?;
    let mut utm = UtmParams::default();

    for (key, value) in url.query_pairs() {
        let slot = match key.as_ref() {
            "utm_source" => &mut utm.source,
            "utm_medium" => &mut utm.medium,
            "utm_campaign" => &mut utm.campaign,
            "utm_term" => &mut utm.term,
            "utm_content" => &mut utm.content,
            _ => continue,
        };
        // First occurrence wins, like URLSearchParams::get.
        if slot.is_none() {
            *slot = Some(sanitize(&value, MAX_UTM_LEN));
        }
    }

    (!utm.is_empty()).then_some(utm)
}
