//! Reactive source of truth for "who is logged in".
//!
//! One writer, many readers: [`Auth`] is provided once via Leptos context;
//! pages and the route guard read its signal, and `login`/`logout`/token
//! refresh are the only mutations. Both write through to the session store
//! before flipping the in-memory state, so the persisted and reactive views
//! never diverge after a completed transition.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::auth::role::Role;
use crate::auth::session::{Session, SessionStore};

/// Auth state machine: `Loading` until the startup check has run, then
/// either `Anonymous` or `Authenticated`. Role changes go through
/// logout/login; there is no authenticated-to-authenticated transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Loading,
    Anonymous,
    Authenticated(Role),
}

/// Handle over the session store plus its reactive mirror.
#[derive(Clone)]
pub struct Auth {
    status: RwSignal<AuthStatus>,
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl Auth {
    pub fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Loading),
            store,
        }
    }

    /// Startup check: re-derive the reactive state from whatever the store
    /// currently holds.
    pub fn restore(&self) {
        let next = match self.store.read() {
            Some(session) => AuthStatus::Authenticated(session.role),
            None => AuthStatus::Anonymous,
        };
        self.status.set(next);
    }

    /// Persist a fresh login triple, then update the reactive state.
    pub fn login(&self, access_token: String, refresh_token: String, role: Role) {
        self.store.save(&Session {
            access_token,
            refresh_token,
            role,
        });
        self.status.set(AuthStatus::Authenticated(role));
    }

    /// Clear the persisted session, then update the reactive state.
    /// Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        self.status.set(AuthStatus::Anonymous);
    }

    /// Current state (reactive read).
    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status.get(), AuthStatus::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self.status.get() {
            AuthStatus::Authenticated(role) => Some(role),
            _ => None,
        }
    }

    /// Snapshot of the persisted session, re-read from the store.
    pub(crate) fn session(&self) -> Option<Session> {
        self.store.read()
    }

    /// Overwrite the stored tokens after a refresh, keeping the role.
    pub(crate) fn apply_refresh(&self, access_token: &str, refresh_token: &str) {
        if let Some(mut session) = self.store.read() {
            session.access_token = access_token.to_owned();
            session.refresh_token = refresh_token.to_owned();
            self.store.save(&session);
        }
    }
}
