use std::sync::LazyLock;

use glimpse_core::constants::{CLIENT_ID_MAX_LEN, CLIENT_ID_MIN_LEN};
use regex::Regex;

static CLIENT_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").ok());

/// A client id is 8 to 64 characters of `[A-Za-z0-9_-]`.
pub fn is_valid_client_id(id: &str) -> bool {
    if !(CLIENT_ID_MIN_LEN..=CLIENT_ID_MAX_LEN).contains(&id.len()) {
        return false;
    }
    match CLIENT_ID.as_ref() {
        Some(re) => re.is_match(id),
        None => id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'),
    }
}
