use super::*;

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_default_is_unknown() {
    let state = AuthState::default();
    assert_eq!(state.status, SessionStatus::Unknown);
    assert!(state.username.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_state_carries_username() {
    let state = AuthState::authenticated("alice");
    assert!(state.is_authenticated());
    assert_eq!(state.username.as_deref(), Some("alice"));
}

#[test]
fn unauthenticated_state_clears_username() {
    let state = AuthState::unauthenticated();
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.username.is_none());
}

// =============================================================
// Session handle
// =============================================================

#[test]
fn session_starts_unknown() {
    let session = Session::new();
    assert_eq!(session.status(), SessionStatus::Unknown);
    assert!(session.username().is_none());
}

#[test]
fn session_marks_apply_both_fields() {
    let session = Session::new();

    session.mark_authenticated("bob");
    assert!(session.is_authenticated());
    assert_eq!(session.username().as_deref(), Some("bob"));

    session.mark_unauthenticated();
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert!(session.username().is_none());
}

#[test]
fn unchanged_outcome_does_not_notify_subscribers() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let session = Session::new();
    session.mark_authenticated("alice");

    let evals = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evals);
    let status = Memo::new(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
        session.status()
    });
    assert_eq!(status.get(), SessionStatus::Authenticated);
    assert_eq!(evals.load(Ordering::Relaxed), 1);

    // A repeated check with the same outcome writes nothing.
    session.mark_authenticated("alice");
    assert_eq!(status.get(), SessionStatus::Authenticated);
    assert_eq!(evals.load(Ordering::Relaxed), 1);

    // A different outcome still propagates.
    session.mark_unauthenticated();
    assert_eq!(status.get(), SessionStatus::Unauthenticated);
    assert_eq!(evals.load(Ordering::Relaxed), 2);
}

#[test]
fn later_check_supersedes_earlier_ticket() {
    let session = Session::new();

    let first = session.begin_check();
    let second = session.begin_check();

    assert!(!session.check_is_current(first));
    assert!(session.check_is_current(second));
}
