use super::*;

// =============================================================
// Cookie header parsing
// =============================================================

#[test]
fn cookie_value_finds_named_cookie() {
    let header = "session_token=abc123; csrf_token=xyz789";
    assert_eq!(cookie_value(header, "session_token").as_deref(), Some("abc123"));
    assert_eq!(cookie_value(header, "csrf_token").as_deref(), Some("xyz789"));
}

#[test]
fn cookie_value_tolerates_spacing() {
    let header = " a=1 ;  csrf_token = tok ";
    assert_eq!(cookie_value(header, "csrf_token").as_deref(), Some("tok"));
}

#[test]
fn cookie_value_missing_returns_none() {
    assert!(cookie_value("a=1; b=2", "session_token").is_none());
    assert!(cookie_value("", "session_token").is_none());
}

#[test]
fn cookie_value_does_not_match_name_prefix() {
    let header = "session_token_old=stale; other=1";
    assert!(cookie_value(header, "session_token").is_none());
}

#[test]
fn cookie_value_keeps_value_with_equals_inside() {
    let header = "csrf_token=a=b";
    assert_eq!(cookie_value(header, "csrf_token").as_deref(), Some("a=b"));
}

// =============================================================
// MemoryCredentials
// =============================================================

#[test]
fn memory_store_round_trips_username() {
    let store = MemoryCredentials::default();
    assert!(store.username().is_none());

    store.set_username("alice");
    assert_eq!(store.username().as_deref(), Some("alice"));

    store.clear_username();
    assert!(store.username().is_none());
}

#[test]
fn memory_store_round_trips_cookies() {
    let store = MemoryCredentials::default();
    store.set_cookie(CSRF_COOKIE, "tok");
    assert_eq!(store.cookie(CSRF_COOKIE).as_deref(), Some("tok"));

    store.clear_cookie(CSRF_COOKIE);
    assert!(store.cookie(CSRF_COOKIE).is_none());
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryCredentials::default();
    let clone = store.clone();

    clone.set_cookie(SESSION_COOKIE, "s");
    assert_eq!(store.cookie(SESSION_COOKIE).as_deref(), Some("s"));
}
