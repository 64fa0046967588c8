use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.tn//"), "https://api.example.tn");
}

#[test]
fn normalize_base_url_blank_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
}

#[test]
fn join_url_handles_missing_leading_slash() {
    assert_eq!(join_url("http://x", "/auth/me"), "http://x/auth/me");
    assert_eq!(join_url("http://x", "auth/me"), "http://x/auth/me");
}

#[test]
fn api_url_uses_configured_base() {
    assert!(api_url("/offers/").ends_with("/offers/"));
    assert!(!api_base_url().ends_with('/'));
}
