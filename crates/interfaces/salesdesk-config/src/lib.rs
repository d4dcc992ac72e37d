//! Central configuration constants for the console and its record service.

/// Record service address used when neither settings nor environment provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the stored base URL.
pub const BASE_URL_ENV: &str = "SALESDESK_BASE_URL";

/// Environment variables read for the basic-auth credential on every request.
pub const USERNAME_ENV: &str = "SALESDESK_USERNAME";
pub const PASSWORD_ENV: &str = "SALESDESK_PASSWORD";

/// Default per-request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum and maximum accepted per-request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Multiplier applied by the demo "raise salary" action.
pub const RAISE_FACTOR: f64 = 1.10;

/// Convenience function to clamp a timeout into the allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
}
