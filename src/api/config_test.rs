use super::*;

// =============================================================================
// read_base_url — uses unique env var names to avoid races with parallel
// tests; API_BASE_URL itself is a shared global.
// =============================================================================

#[test]
fn read_base_url_trims_trailing_slash() {
    let key = "__TEST_FO_BASE_URL_1__";
    unsafe { std::env::set_var(key, "https://ops.example.com/") };
    assert_eq!(read_base_url(key), Some("https://ops.example.com".to_string()));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn read_base_url_trims_whitespace_and_slashes() {
    let key = "__TEST_FO_BASE_URL_2__";
    unsafe { std::env::set_var(key, "  https://ops.example.com//  ") };
    assert_eq!(read_base_url(key), Some("https://ops.example.com".to_string()));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn read_base_url_empty_counts_as_unset() {
    let key = "__TEST_FO_BASE_URL_3__";
    unsafe { std::env::set_var(key, "") };
    assert_eq!(read_base_url(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn read_base_url_unset_returns_none() {
    assert_eq!(read_base_url("__TEST_FO_BASE_URL_SURELY_UNSET__"), None);
}

// =============================================================================
// env_parse_u64
// =============================================================================

#[test]
fn env_parse_u64_reads_valid_value() {
    let key = "__TEST_FO_TIMEOUT_1__";
    unsafe { std::env::set_var(key, "45") };
    assert_eq!(env_parse_u64(key, 30), 45);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_on_garbage() {
    let key = "__TEST_FO_TIMEOUT_2__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 30), 30);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_when_unset() {
    assert_eq!(env_parse_u64("__TEST_FO_TIMEOUT_UNSET__", 10), 10);
}

// =============================================================================
// constructors
// =============================================================================

#[test]
fn with_base_url_trims_and_sets_default_timeouts() {
    let config = ApiConfig::with_base_url("http://127.0.0.1:4000/");
    assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:4000"));
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn unconfigured_has_no_base_url() {
    let config = ApiConfig::unconfigured();
    assert_eq!(config.base_url, None);
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}
