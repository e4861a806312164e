//! Durable persistence of the login session across page reloads.
//!
//! The session is a triple: access token, refresh token, role. The triple is
//! all-or-nothing — a partial or corrupted persisted state reads back as
//! "no session" and heals itself on the next login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

use crate::auth::role::Role;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const ROLE_KEY: &str = "role";

/// The persisted login triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub role: Role,
}

/// Key-value persistence for the session triple.
///
/// Injected into [`crate::auth::context::Auth`] and the request client
/// instead of being reached for as a global. Writers are `login`, `logout`,
/// and the token-refresh step; readers always re-read at the moment of use.
pub trait SessionStore {
    /// Write all three values, overwriting any existing session.
    fn save(&self, session: &Session);
    /// Read the current triple; any missing or unparseable field means
    /// there is no session.
    fn read(&self) -> Option<Session>;
    /// Remove all three keys. Safe to call when nothing is stored.
    fn clear(&self);
}

/// `localStorage`-backed store, scoped to the browser origin.
///
/// Storage writes are treated as infallible per web-platform convention;
/// reads never throw and report corruption as an empty session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn save(&self, session: &Session) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, &session.access_token);
                let _ = storage.set_item(REFRESH_TOKEN_KEY, &session.refresh_token);
                let _ = storage.set_item(ROLE_KEY, session.role.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
        }
    }

    fn read(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let get = |key: &str| storage.get_item(key).ok().flatten();
            let access_token = get(ACCESS_TOKEN_KEY)?;
            let refresh_token = get(REFRESH_TOKEN_KEY)?;
            let role = Role::from_name(&get(ROLE_KEY)?)?;
            Some(Session {
                access_token,
                refresh_token,
                role,
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
                let _ = storage.remove_item(ROLE_KEY);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// In-memory store for unit tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
}

impl SessionStore for MemoryStore {
    fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn read(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}
