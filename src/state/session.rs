//! Session state shared across the application.
//!
//! `Session` is a thin handle over a reactive [`AuthState`] cell. Reads are
//! public; writes are `pub(crate)` so that only the auth client
//! (`crate::net::auth`) can move the session between states. UI code reacts
//! to the signal, it never mutates it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Where the client currently stands with the server, from the UI's point
/// of view. Exactly one of these holds at any instant; transitions are only
/// produced by completed auth client calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No check has completed yet (initial load).
    #[default]
    Unknown,
    /// The most recently completed check accepted the session.
    Authenticated,
    /// The most recently completed check rejected the session, or the user
    /// logged out.
    Unauthenticated,
}

/// Authentication state tracking the current user and check status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
    pub username: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub(crate) fn authenticated(username: &str) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            username: Some(username.to_owned()),
        }
    }

    pub(crate) fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            username: None,
        }
    }
}

/// Handle to the process-wide session state, provided via context.
///
/// Validation checks may overlap (two guards, or a check racing a login), so
/// the handle also carries an epoch counter: every check takes a ticket via
/// [`Session::begin_check`] and only applies its result if no newer check
/// has started since. The displayed state therefore always corresponds to
/// the most recently *initiated* check that completed, never a stale one.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<AuthState>,
    check_epoch: RwSignal<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            check_epoch: RwSignal::new(0),
        }
    }

    /// Reactive read of the full auth state.
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.with(|s| s.status)
    }

    pub fn username(&self) -> Option<String> {
        self.state.with(|s| s.username.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub(crate) fn mark_authenticated(&self, username: &str) {
        self.apply(AuthState::authenticated(username));
    }

    pub(crate) fn mark_unauthenticated(&self) {
        self.apply(AuthState::unauthenticated());
    }

    /// Write the state, skipping the write (and hence the subscriber
    /// notification) when it would not change anything. Repeated checks
    /// with the same outcome must not re-render the guarded tree or
    /// re-trigger resources hanging off the session.
    fn apply(&self, next: AuthState) {
        if self.state.try_with_untracked(|state| *state == next) == Some(true) {
            return;
        }
        let _ = self.state.try_set(next);
    }

    /// Register the start of a validation check and return its ticket.
    pub(crate) fn begin_check(&self) -> u64 {
        self.check_epoch
            .try_update(|e| {
                *e += 1;
                *e
            })
            .unwrap_or(0)
    }

    /// Whether the check holding `ticket` is still the latest one started.
    pub(crate) fn check_is_current(&self, ticket: u64) -> bool {
        self.check_epoch.get_untracked() == ticket
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
