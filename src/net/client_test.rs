use std::cell::Cell;
use std::rc::Rc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use futures::executor::block_on;
use futures::future::join;
use leptos::prelude::Owner;

use super::*;
use crate::auth::context::AuthStatus;
use crate::auth::role::Role;
use crate::auth::session::{MemoryStore, Session, SessionStore};

const NOW: i64 = 1_000_000;

/// Pending on the first poll, ready on the second, so a second request can
/// join an in-flight refresh.
async fn yield_once() {
    let mut yielded = false;
    std::future::poll_fn(|cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
    .await;
}

fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
    format!("{header}.{body}.sig")
}

fn fresh_token() -> String {
    token_expiring_at(NOW + 3600)
}

fn stale_token() -> String {
    token_expiring_at(NOW - 10)
}

fn pair(access: &str) -> TokenPair {
    TokenPair {
        access_token: access.to_owned(),
        refresh_token: "rotated-rt".to_owned(),
    }
}

/// Auth over an in-memory store holding the given access token.
fn auth_with_token(access_token: &str) -> (Owner, Auth, std::sync::Arc<MemoryStore>) {
    let owner = Owner::new();
    owner.set();
    let store = std::sync::Arc::new(MemoryStore::default());
    store.save(&Session {
        access_token: access_token.to_owned(),
        refresh_token: "rt-0".to_owned(),
        role: Role::Student,
    });
    let auth = Auth::new(store.clone() as std::sync::Arc<dyn SessionStore + Send + Sync>);
    auth.restore();
    (owner, auth, store)
}

/// Refresh stub that counts invocations and records the credential it got.
fn counting_refresh(
    calls: &Rc<Cell<u32>>,
    result: Result<TokenPair, ApiError>,
) -> impl FnOnce(String) -> std::pin::Pin<Box<dyn Future<Output = Result<TokenPair, ApiError>>>> + 'static
{
    let calls = calls.clone();
    move |_refresh_token| {
        calls.set(calls.get() + 1);
        Box::pin(async move { result })
    }
}

#[test]
fn anonymous_request_skips_interception() {
    let (_owner, auth, _store) = auth_with_token(&fresh_token());
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let bearer = block_on(bearer_for_request(
        &auth,
        None,
        NOW,
        &flight,
        counting_refresh(&calls, Ok(pair("unused"))),
    ));

    assert_eq!(bearer, Ok(None));
    assert_eq!(calls.get(), 0);
}

#[test]
fn fresh_token_dispatches_without_refresh() {
    let token = fresh_token();
    let (_owner, auth, _store) = auth_with_token(&token);
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let bearer = block_on(bearer_for_request(
        &auth,
        Some(&token),
        NOW,
        &flight,
        counting_refresh(&calls, Ok(pair("unused"))),
    ));

    assert_eq!(bearer, Ok(Some(token)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn expired_token_refreshes_exactly_once_then_dispatches_new_token() {
    let token = stale_token();
    let (_owner, auth, store) = auth_with_token(&token);
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));
    let seen_credential = Rc::new(std::cell::RefCell::new(None::<String>));

    let refresh = {
        let calls = calls.clone();
        let seen = seen_credential.clone();
        move |refresh_token: String| {
            calls.set(calls.get() + 1);
            *seen.borrow_mut() = Some(refresh_token);
            async move { Ok(pair("new-at")) }
        }
    };

    let bearer = block_on(bearer_for_request(&auth, Some(&token), NOW, &flight, refresh));

    assert_eq!(bearer, Ok(Some("new-at".to_owned())));
    assert_eq!(calls.get(), 1);
    // The refresh call used the stored refresh credential.
    assert_eq!(seen_credential.borrow().as_deref(), Some("rt-0"));
    // The rotated pair was persisted before dispatch, role untouched.
    let saved = store.read().expect("session kept");
    assert_eq!(saved.access_token, "new-at");
    assert_eq!(saved.refresh_token, "rotated-rt");
    assert_eq!(saved.role, Role::Student);
}

#[test]
fn refresh_failure_fails_request_and_forces_logout() {
    let token = stale_token();
    let (_owner, auth, store) = auth_with_token(&token);
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let result = block_on(bearer_for_request(
        &auth,
        Some(&token),
        NOW,
        &flight,
        counting_refresh(
            &calls,
            Err(ApiError::Status {
                status: 401,
                message: "refresh token expired".to_owned(),
            }),
        ),
    ));

    assert!(matches!(result, Err(ApiError::RefreshFailed(_))));
    assert_eq!(calls.get(), 1);
    assert_eq!(store.read(), None);
    assert_eq!(auth.status(), AuthStatus::Anonymous);
}

#[test]
fn concurrent_expired_requests_share_one_refresh() {
    let token = stale_token();
    let (_owner, auth, _store) = auth_with_token(&token);
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let slow_refresh = |calls: &Rc<Cell<u32>>| {
        let calls = calls.clone();
        move |_refresh_token: String| {
            calls.set(calls.get() + 1);
            async move {
                // Stay in flight for one poll so the second request joins.
                yield_once().await;
                Ok(pair("new-at"))
            }
        }
    };

    let (a, b) = block_on(join(
        bearer_for_request(&auth, Some(&token), NOW, &flight, slow_refresh(&calls)),
        bearer_for_request(&auth, Some(&token), NOW, &flight, slow_refresh(&calls)),
    ));

    assert_eq!(a, Ok(Some("new-at".to_owned())));
    assert_eq!(b, Ok(Some("new-at".to_owned())));
    assert_eq!(calls.get(), 1);
}

#[test]
fn already_rotated_session_short_circuits_without_network() {
    // This client captured a token that has since been rotated by another
    // flight; the store already holds a fresh one.
    let captured = stale_token();
    let (_owner, auth, store) = auth_with_token(&fresh_token());
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let bearer = block_on(bearer_for_request(
        &auth,
        Some(&captured),
        NOW,
        &flight,
        counting_refresh(&calls, Ok(pair("unused"))),
    ));

    let stored = store.read().expect("session kept");
    assert_eq!(bearer, Ok(Some(stored.access_token)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn stale_token_with_emptied_store_fails_without_refresh_call() {
    let token = stale_token();
    let (_owner, auth, store) = auth_with_token(&token);
    store.clear();
    let flight = SingleFlight::new();
    let calls = Rc::new(Cell::new(0));

    let result = block_on(bearer_for_request(
        &auth,
        Some(&token),
        NOW,
        &flight,
        counting_refresh(&calls, Ok(pair("unused"))),
    ));

    assert!(matches!(result, Err(ApiError::RefreshFailed(_))));
    assert_eq!(calls.get(), 0);
    assert_eq!(auth.status(), AuthStatus::Anonymous);
}

#[test]
fn client_captures_token_at_construction() {
    let token = fresh_token();
    let (_owner, auth, store) = auth_with_token(&token);

    let client = ApiClient::new(&auth);
    assert_eq!(client.token.as_deref(), Some(token.as_str()));

    // A later store change does not affect the captured baseline.
    store.clear();
    assert_eq!(client.token.as_deref(), Some(token.as_str()));

    let anonymous = ApiClient::new(&auth);
    assert_eq!(anonymous.token, None);
}
