//! # glimpse-privacy
//!
//! Pure functions that validate and clean every untrusted value before it is
//! stored in an event. Sanitized values end up rendered in an analytics
//! dashboard, so this layer strips markup characters and script-capable URL
//! schemes independently of any server-side validation.
//!
//! ## Modules
//!
//! - `validator` — tenant id validation
//! - `sanitizer` — character and scheme stripping with length caps
//! - `url_sanitizer` — origin-relative resolution restricted to http(s)
//! - `utm` — campaign parameter extraction

pub mod sanitizer;
pub mod url_sanitizer;
pub mod utm;
pub mod validator;

pub use sanitizer::{sanitize, sanitize_default};
pub use url_sanitizer::{host_of, sanitize_url};
pub use utm::extract_utm;
pub use validator::is_valid_client_id;
