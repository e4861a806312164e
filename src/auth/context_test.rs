use std::sync::Arc;

use leptos::prelude::Owner;

use super::*;
use crate::auth::session::MemoryStore;

/// Reactive owner for signal-backed tests plus an auth handle over a
/// shared in-memory store.
fn auth_fixture() -> (Owner, Auth, Arc<MemoryStore>) {
    let owner = Owner::new();
    owner.set();
    let store = Arc::new(MemoryStore::default());
    let auth = Auth::new(store.clone() as Arc<dyn SessionStore + Send + Sync>);
    (owner, auth, store)
}

#[test]
fn starts_loading() {
    let (_owner, auth, _store) = auth_fixture();
    assert_eq!(auth.status(), AuthStatus::Loading);
    assert!(!auth.is_authenticated());
    assert_eq!(auth.role(), None);
}

#[test]
fn restore_with_empty_store_is_anonymous() {
    let (_owner, auth, _store) = auth_fixture();
    auth.restore();
    assert_eq!(auth.status(), AuthStatus::Anonymous);
}

#[test]
fn restore_with_saved_session_is_authenticated() {
    let (_owner, auth, store) = auth_fixture();
    store.save(&Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        role: Role::Teacher,
    });
    auth.restore();
    assert_eq!(auth.status(), AuthStatus::Authenticated(Role::Teacher));
    assert_eq!(auth.role(), Some(Role::Teacher));
}

#[test]
fn login_writes_through_then_updates_state() {
    let (_owner, auth, store) = auth_fixture();
    auth.restore();
    auth.login("t1".to_owned(), "r1".to_owned(), Role::Admin);

    assert_eq!(auth.status(), AuthStatus::Authenticated(Role::Admin));
    // Persisted and in-memory views agree.
    let saved = store.read().expect("session persisted");
    assert_eq!(saved.access_token, "t1");
    assert_eq!(saved.refresh_token, "r1");
    assert_eq!(saved.role, Role::Admin);
}

#[test]
fn logout_clears_store_and_state() {
    let (_owner, auth, store) = auth_fixture();
    auth.login("t1".to_owned(), "r1".to_owned(), Role::Admin);
    auth.logout();

    assert_eq!(auth.status(), AuthStatus::Anonymous);
    assert_eq!(store.read(), None);
}

#[test]
fn logout_is_idempotent() {
    let (_owner, auth, store) = auth_fixture();
    auth.login("t1".to_owned(), "r1".to_owned(), Role::Student);
    auth.logout();
    auth.logout();

    assert_eq!(auth.status(), AuthStatus::Anonymous);
    assert_eq!(store.read(), None);
}

#[test]
fn apply_refresh_rotates_tokens_and_keeps_role() {
    let (_owner, auth, store) = auth_fixture();
    auth.login("old-at".to_owned(), "old-rt".to_owned(), Role::Student);

    auth.apply_refresh("new-at", "new-rt");

    let saved = store.read().expect("session persisted");
    assert_eq!(saved.access_token, "new-at");
    assert_eq!(saved.refresh_token, "new-rt");
    assert_eq!(saved.role, Role::Student);
    // Still authenticated; a refresh is not a state transition.
    assert_eq!(auth.status(), AuthStatus::Authenticated(Role::Student));
}

#[test]
fn apply_refresh_without_session_is_a_no_op() {
    let (_owner, auth, store) = auth_fixture();
    auth.restore();
    auth.apply_refresh("new-at", "new-rt");
    assert_eq!(store.read(), None);
}
