//! Markup and scheme stripping.
//!
//! Lengths are counted in `char`s so truncation never splits a code point.

use std::sync::LazyLock;

use glimpse_core::constants::DEFAULT_MAX_LEN;
use regex::Regex;

/// Characters that could open markup or break out of an attribute.
const FORBIDDEN_CHARS: [char; 6] = ['<', '>', '\'', '"', '&', '\\'];

/// Script-capable URL schemes, removed wherever they appear.
const FORBIDDEN_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

static SCHEMES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:|data:|vbscript:").ok());

/// Strip forbidden characters and schemes, then cap at `max_len` chars.
pub fn sanitize(input: &str, max_len: usize) -> String {
    let mut cleaned: String = input
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect();

    // Removing one occurrence can splice a new one together
    // ("javajavascript:script:"), so strip until nothing matches.
    loop {
        let next = strip_schemes(&cleaned);
        if next.len() == cleaned.len() {
            break;
        }
        cleaned = next;
    }

    truncate_chars(cleaned, max_len)
}

/// [`sanitize`] with the default cap.
pub fn sanitize_default(input: &str) -> String {
    sanitize(input, DEFAULT_MAX_LEN)
}

fn strip_schemes(input: &str) -> String {
    match SCHEMES.as_ref() {
        Some(re) => re.replace_all(input, "").into_owned(),
        None => strip_schemes_manual(input),
    }
}

/// Fallback when the scheme regex failed to compile.
fn strip_schemes_manual(input: &str) -> String {
    let mut out = input.to_string();
    for scheme in FORBIDDEN_SCHEMES {
        while let Some(pos) = out.to_ascii_lowercase().find(scheme) {
            out.replace_range(pos..pos + scheme.len(), "");
        }
    }
    out
}

fn truncate_chars(mut s: String, max_len: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max_len) {
        s.truncate(idx);
    }
    s
}
