// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the API concept it constrains. Reading these
//! should tell you where requests go, how long they may take, and how the
//! client paces itself against the Blikk API.

// ---------------------------------------------------------------------------
// Blikk API endpoints
// ---------------------------------------------------------------------------

/// Production base URL of the Blikk public API.
///
/// Resource paths are appended directly, so the trailing slash matters.
pub const BLIKK_API_BASE_URL: &str = "https://publicapi.blikk.com/";

/// Endpoint that exchanges app credentials for a bearer token.
pub const BLIKK_TOKEN_URL: &str = "https://publicapi.blikk.com/v1/Auth/Token";

// ---------------------------------------------------------------------------
// Request pacing
// ---------------------------------------------------------------------------

/// Transport timeout applied to every request unless overridden.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Wait applied to a 429 response whose `Retry-After` is missing, unparseable
/// or already in the past.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// First page index. The Blikk API counts pages from 1.
pub const FIRST_PAGE: u32 = 1;

/// Page size used by `ListOptions::new`.
///
/// The API maximum is 100. Using it keeps round-trips to a minimum.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Filter limits
// ---------------------------------------------------------------------------

/// Longest date range, in days, the day-statistics endpoint accepts.
pub const MAX_STATISTICS_SPAN_DAYS: i64 = 31;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the Blikk app identifier.
pub const ENV_APP_ID: &str = "BLIKK_APP_ID";

/// Environment variable holding the Blikk app secret.
pub const ENV_APP_SECRET: &str = "BLIKK_APP_SECRET";

/// Environment variable holding a ready-made bearer token (CLI only).
pub const ENV_TOKEN: &str = "BLIKK_TOKEN";

/// Timezone the calendar helpers compute "previous week/month" in.
pub const CALENDAR_TIMEZONE: chrono_tz::Tz = chrono_tz::Europe::Stockholm;
