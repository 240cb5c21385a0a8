/// Glimpse agent version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of events carried by one batch request.
pub const BATCH_SIZE: usize = 10;

/// Delay before a partially filled queue is flushed (milliseconds).
pub const FLUSH_INTERVAL_MS: u64 = 5_000;

/// Retries attempted on the POST fallback path before a delivery is dropped.
pub const MAX_RETRIES: u32 = 3;

/// Base of the exponential retry delay: `2^k * RETRY_BASE_DELAY_MS`.
pub const RETRY_BASE_DELAY_MS: u64 = 1_000;

/// Upper bound on queued events while deliveries keep failing.
pub const MAX_QUEUE_DEPTH: usize = 1_000;

/// Idle window after which a session expires (minutes).
pub const SESSION_TIMEOUT_MINS: i64 = 30;

/// Storage key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "glimpse_session";

/// Dwell time after which a page view counts as engaged (seconds).
pub const ENGAGEMENT_SECS: u64 = 30;

/// Minimum spacing between scroll-depth evaluations (milliseconds).
pub const SCROLL_THROTTLE_MS: u64 = 200;

/// Scroll milestones, in percent of scrollable depth.
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

// --- Sanitization caps (characters) ---
pub const DEFAULT_MAX_LEN: usize = 500;
pub const MAX_URL_LEN: usize = 2_000;
pub const MAX_EVENT_NAME_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_LANGUAGE_LEN: usize = 20;
pub const MAX_TIMEZONE_LEN: usize = 50;
pub const MAX_LINK_TEXT_LEN: usize = 100;
pub const MAX_ERROR_MESSAGE_LEN: usize = 200;
pub const MAX_ERROR_FILENAME_LEN: usize = 100;
pub const MAX_UTM_LEN: usize = 100;
pub const MAX_USER_ID_LEN: usize = 100;

// --- Client id ---
pub const CLIENT_ID_MIN_LEN: usize = 8;
pub const CLIENT_ID_MAX_LEN: usize = 64;

// --- Collector endpoints, relative to the script's directory ---
pub const SINGLE_ENDPOINT_PATH: &str = "api/collector";
pub const BATCH_ENDPOINT_PATH: &str = "api/collector/batch";

// --- Event names ---
pub const EVENT_PAGE_VIEW: &str = "page_view";
pub const EVENT_TIME_ON_PAGE: &str = "time_on_page";
pub const EVENT_SCROLL_DEPTH: &str = "scroll_depth";
pub const EVENT_OUTBOUND_CLICK: &str = "outbound_click";
pub const EVENT_JS_ERROR: &str = "js_error";
pub const EVENT_PROMISE_ERROR: &str = "promise_error";
pub const EVENT_ENGAGED: &str = "engaged";
pub const EVENT_PERFORMANCE: &str = "performance";
pub const EVENT_IDENTIFY: &str = "identify";
