//! REST API clients for communicating with the DevTasks server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, form-encoded the
//! way the server expects, with cookies included and the CSRF token sent as
//! a request header on state-changing calls.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.

pub mod auth;
pub mod projects;
pub mod tasks;
pub mod types;

use thiserror::Error;

/// Low-level outcome of a request to the remote API.
///
/// `Transport` means no response at all; `Rejected` means the server
/// answered with a non-2xx status and (usually) a structured error body.
/// Callers above the auth client never see this distinction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error")]
    Transport,
    #[error("{}", message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },
}

/// Send a form-encoded request with cookies included.
#[cfg(feature = "hydrate")]
pub(crate) async fn send_form(
    method: gloo_net::http::Method,
    path: &str,
    fields: &[(&str, &str)],
    csrf_token: Option<&str>,
) -> Result<gloo_net::http::Response, ApiError> {
    let form = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Transport)?;
    for (key, value) in fields {
        form.append(key, value);
    }

    let mut req = gloo_net::http::RequestBuilder::new(path)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include);
    if let Some(token) = csrf_token {
        req = req.header("X-CSRF-Token", token);
    }

    req.body(form)
        .map_err(|_| ApiError::Transport)?
        .send()
        .await
        .map_err(|_| ApiError::Transport)
}

/// Read the structured `{error}` body of a rejected response.
#[cfg(feature = "hydrate")]
pub(crate) async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
    ApiError::Rejected { status, message }
}

/// Current CSRF token for state-changing CRUD calls, empty if absent.
#[cfg(feature = "hydrate")]
pub(crate) fn csrf_token() -> String {
    use crate::util::credentials::{BrowserCredentials, CSRF_COOKIE, CredentialStore};
    BrowserCredentials.cookie(CSRF_COOKIE).unwrap_or_default()
}
