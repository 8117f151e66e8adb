//! Auth client: login, registration, logout, and session validation.
//!
//! This is the only place in the crate that writes the session state or the
//! stored credentials. Every transition goes through a completed network
//! call (or the documented short-circuit); there are no optimistic updates
//! and no automatic retries.
//!
//! ERROR HANDLING
//! ==============
//! The transport distinguishes "no response" from "server said no", but
//! both collapse to a single `AuthError` with display text at this
//! boundary. A failed validation is not an error at all, it is a normal
//! boolean outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use crate::state::session::Session;
use crate::util::credentials::{CSRF_COOKIE, CredentialStore, SESSION_COOKIE};

/// Failure surfaced by login or registration. Callers distinguish only
/// success vs failure; the reason is display text for the form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct AuthError {
    pub reason: String,
}

impl AuthError {
    fn from_api(err: &ApiError, fallback: &str) -> Self {
        let reason = match err {
            ApiError::Transport => "Network error".to_owned(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { message: None, .. } => fallback.to_owned(),
        };
        Self { reason }
    }
}

/// Body of a successful login response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "csrfToken", default)]
    pub csrf_token: String,
}

/// Transport seam for the four auth endpoints. Implemented over HTTP by
/// [`HttpAuthApi`] and by in-memory doubles in tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn register(&self, username: &str, password: &str, email: &str)
    -> Result<(), ApiError>;
    async fn validate(&self, username: &str, csrf_token: &str) -> Result<(), ApiError>;
    async fn logout(&self, username: &str, csrf_token: &str) -> Result<(), ApiError>;
}

/// `AuthApi` over the remote REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = super::send_form(
                gloo_net::http::Method::POST,
                "/api/login",
                &[("username", username), ("password", password)],
                None,
            )
            .await?;
            if !resp.ok() {
                return Err(super::rejection(resp).await);
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|_| ApiError::Transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Transport)
        }
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = super::send_form(
                gloo_net::http::Method::POST,
                "/api/register",
                &[
                    ("username", username),
                    ("password", password),
                    ("email", email),
                ],
                None,
            )
            .await?;
            if !resp.ok() {
                return Err(super::rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password, email);
            Err(ApiError::Transport)
        }
    }

    async fn validate(&self, username: &str, csrf_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = super::send_form(
                gloo_net::http::Method::POST,
                "/api/validate",
                &[("username", username)],
                Some(csrf_token),
            )
            .await?;
            if !resp.ok() {
                return Err(super::rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, csrf_token);
            Err(ApiError::Transport)
        }
    }

    async fn logout(&self, username: &str, csrf_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = super::send_form(
                gloo_net::http::Method::POST,
                "/api/logout",
                &[("username", username)],
                Some(csrf_token),
            )
            .await?;
            if !resp.ok() {
                return Err(super::rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, csrf_token);
            Err(ApiError::Transport)
        }
    }
}

/// The auth client used by the app: HTTP transport, browser credentials.
pub type BrowserAuthClient = AuthClient<HttpAuthApi, crate::util::credentials::BrowserCredentials>;

/// Performs auth operations against the remote API and applies their
/// results to the shared [`Session`] and the credential store.
#[derive(Clone, Debug)]
pub struct AuthClient<A, C> {
    api: A,
    store: C,
    session: Session,
}

impl<A: AuthApi, C: CredentialStore> AuthClient<A, C> {
    pub fn new(api: A, store: C, session: Session) -> Self {
        Self {
            api,
            store,
            session,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Log in and establish a session.
    ///
    /// On success the CSRF token from the response body is persisted as a
    /// cookie, the username is persisted, and the session becomes
    /// authenticated. On failure the session becomes unauthenticated and
    /// nothing is persisted. Returns the CSRF token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        match self.api.login(username, password).await {
            Ok(body) => {
                if !body.csrf_token.is_empty() {
                    self.store.set_cookie(CSRF_COOKIE, &body.csrf_token);
                }
                self.store.set_username(username);
                self.session.begin_check();
                self.session.mark_authenticated(username);
                Ok(body.csrf_token)
            }
            Err(err) => {
                self.session.begin_check();
                self.session.mark_unauthenticated();
                Err(AuthError::from_api(&err, "Login failed"))
            }
        }
    }

    /// Create an account. Does not log the user in and never touches the
    /// session state or stored credentials.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        // TODO: collect a real email address in the registration form.
        let email = format!("{username}@example.com");
        self.api
            .register(username, password, &email)
            .await
            .map_err(|err| AuthError::from_api(&err, "Registration failed"))
    }

    /// Check whether the current session credential is still accepted.
    ///
    /// Idempotent and side-effect-free beyond updating the session state:
    /// it never mints credentials. If the session cookie is absent the
    /// check resolves locally without a network call. A check only applies
    /// its result if no newer check (or login/logout) started meanwhile.
    pub async fn validate_session(&self, username: &str) -> bool {
        let ticket = self.session.begin_check();

        if self.store.cookie(SESSION_COOKIE).is_none() {
            if self.session.check_is_current(ticket) {
                self.session.mark_unauthenticated();
            }
            return false;
        }

        let csrf_token = self.store.cookie(CSRF_COOKIE).unwrap_or_default();
        let outcome = match self.api.validate(username, &csrf_token).await {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("session validation failed: {err}");
                false
            }
        };

        if self.session.check_is_current(ticket) {
            if outcome {
                self.session.mark_authenticated(username);
            } else {
                self.session.mark_unauthenticated();
            }
        }
        outcome
    }

    /// Log out. The server call is best effort; local cleanup (both
    /// cookies, the stored username, the session state) always runs, and
    /// the continuation fires only after cleanup is done.
    pub async fn logout(&self, username: &str, on_complete: impl FnOnce()) {
        let csrf_token = self.store.cookie(CSRF_COOKIE).unwrap_or_default();
        if let Err(err) = self.api.logout(username, &csrf_token).await {
            leptos::logging::warn!("logout request failed: {err}");
        }

        self.store.clear_cookie(SESSION_COOKIE);
        self.store.clear_cookie(CSRF_COOKIE);
        self.store.clear_username();
        self.session.begin_check();
        self.session.mark_unauthenticated();
        on_complete();
    }
}
