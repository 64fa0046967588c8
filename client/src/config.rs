//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from `PORTAL_API_URL`,
//! falling back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Storage key of the persisted bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the persisted JSON user record.
pub const USER_KEY: &str = "user";

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

/// Absolute URL for an API path such as `/offers/`.
pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
