//! Credential storage: the persisted username and the transport cookies.
//!
//! Reads the identity from `localStorage` and the two session cookies from
//! `document.cookie`. Pure accessors, no logic: deciding what the
//! credentials *mean* is the auth client's job. Requires a browser
//! environment; outside it every read is `None` and writes are no-ops.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Cookie carrying the server-issued opaque session token. The client never
/// reads its value, only its presence.
pub const SESSION_COOKIE: &str = "session_token";

/// Cookie carrying the anti-forgery token issued at login and echoed back
/// as the `X-CSRF-Token` header on state-changing requests.
pub const CSRF_COOKIE: &str = "csrf_token";

/// `localStorage` key for the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// Access to the persisted identity and the transport cookies.
pub trait CredentialStore {
    fn username(&self) -> Option<String>;
    fn set_username(&self, username: &str);
    fn clear_username(&self);

    fn cookie(&self, name: &str) -> Option<String>;
    /// Sets a `path=/` cookie readable by the whole app.
    fn set_cookie(&self, name: &str, value: &str);
    /// Expires the cookie immediately.
    fn clear_cookie(&self, name: &str);
}

/// Extract a cookie value from a `document.cookie` style header string.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_owned())
        } else {
            None
        }
    })
}

/// Credential store backed by `localStorage` and `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

#[cfg(feature = "hydrate")]
impl BrowserCredentials {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn html_document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

impl CredentialStore for BrowserCredentials {
    fn username(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.get_item(USERNAME_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_username(&self, username: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.set_item(USERNAME_KEY, username);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
        }
    }

    fn clear_username(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.remove_item(USERNAME_KEY);
            }
        }
    }

    fn cookie(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = Self::html_document()?.cookie().ok()?;
            cookie_value(&header, name).filter(|v| !v.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn set_cookie(&self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = Self::html_document() {
                let _ = doc.set_cookie(&format!("{name}={value}; path=/"));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }

    fn clear_cookie(&self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = Self::html_document() {
                let _ = doc.set_cookie(&format!(
                    "{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    username: Option<String>,
    cookies: HashMap<String, String>,
}

/// In-memory credential store for tests and non-browser contexts. Clones
/// share the same underlying storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials(Rc<RefCell<MemoryInner>>);

impl CredentialStore for MemoryCredentials {
    fn username(&self) -> Option<String> {
        self.0.borrow().username.clone()
    }

    fn set_username(&self, username: &str) {
        self.0.borrow_mut().username = Some(username.to_owned());
    }

    fn clear_username(&self) {
        self.0.borrow_mut().username = None;
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.0.borrow().cookies.get(name).cloned()
    }

    fn set_cookie(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .cookies
            .insert(name.to_owned(), value.to_owned());
    }

    fn clear_cookie(&self, name: &str) {
        self.0.borrow_mut().cookies.remove(name);
    }
}
