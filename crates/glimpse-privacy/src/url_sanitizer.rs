//! URL resolution restricted to http(s).

use glimpse_core::constants::MAX_URL_LEN;
use url::Url;

use crate::sanitizer::sanitize;

/// Resolve `input` against the origin of `page_url` and return the sanitized
/// absolute URL, or `""` when it cannot be parsed or is not http(s).
///
/// Free text with interior whitespace or control characters is rejected
/// rather than percent-encoded into a path.
pub fn sanitize_url(input: &str, page_url: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return String::new();
    }

    let resolved = match Url::parse(page_url) {
        Ok(page) => resolve_against_origin(&page, trimmed),
        Err(_) => Url::parse(trimmed).ok(),
    };

    match resolved {
        Some(url) if matches!(url.scheme(), "http" | "https") => {
            sanitize(url.as_str(), MAX_URL_LEN)
        }
        _ => String::new(),
    }
}

fn resolve_against_origin(page: &Url, input: &str) -> Option<Url> {
    let origin = page.origin();
    if !origin.is_tuple() {
        return Url::parse(input).ok();
    }
    let base = Url::parse(&origin.ascii_serialization()).ok()?;
    base.join(input).ok()
}

/// Host of `url`, if it parses and has one.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(str::to_string)
}
