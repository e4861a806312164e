//! Authenticated request client with transparent token refresh.
//!
//! Built fresh per use, not as a singleton: construction captures the
//! current access token from the session store as the bearer baseline.
//! Before each dispatch the token's expiry claim is checked locally; a
//! stale token is exchanged at `/refresh-token` first, the rotated pair is
//! persisted, and only then does the original request go out. Refresh
//! failure fails the request without sending it.
//!
//! Interception lives here, at the client layer, so every endpoint wrapper
//! in [`crate::net::api`] gets refresh-on-demand without duplicating it.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::context::Auth;
use crate::auth::token;
use crate::net::error::ApiError;
use crate::net::flight::SingleFlight;
use crate::net::types::TokenPair;
#[cfg(feature = "csr")]
use crate::net::types::{Envelope, RefreshRequest};

/// Backend origin, fixed at compile time.
pub(crate) fn api_base() -> &'static str {
    option_env!("CLASSPULSE_API_BASE").unwrap_or("http://localhost:8080")
}

thread_local! {
    // Shared across client instances so concurrent expired requests
    // coalesce into one refresh call.
    static REFRESH_FLIGHT: Rc<SingleFlight<Result<TokenPair, ApiError>>> =
        Rc::new(SingleFlight::new());
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "csr")]
impl Verb {
    fn as_method(self) -> gloo_net::http::Method {
        match self {
            Verb::Get => gloo_net::http::Method::GET,
            Verb::Post => gloo_net::http::Method::POST,
            Verb::Put => gloo_net::http::Method::PUT,
            Verb::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// JSON client whose every request carries a valid, non-expired bearer
/// token. Anonymous use (no stored session) sends requests with no
/// `Authorization` header and never attempts a refresh.
pub struct ApiClient {
    auth: Auth,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(auth: &Auth) -> Self {
        let token = auth.session().map(|s| s.access_token);
        Self {
            auth: auth.clone(),
            token,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Verb::Get, path, None::<&()>).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Verb::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Verb::Put, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Verb::Delete, path, None::<&()>).await
    }

    /// Bearer token to attach, refreshed first if expired.
    async fn bearer(&self) -> Result<Option<String>, ApiError> {
        let flight = REFRESH_FLIGHT.with(Rc::clone);
        bearer_for_request(
            &self.auth,
            self.token.as_deref(),
            token::unix_now(),
            &flight,
            request_refresh,
        )
        .await
    }

    #[cfg(feature = "csr")]
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let bearer = self.bearer().await?;

        let url = format!("{}{path}", api_base());
        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(verb.as_method());
        if let Some(token) = &bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    #[cfg(not(feature = "csr"))]
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        _verb: Verb,
        _path: &str,
        _body: Option<&B>,
    ) -> Result<T, ApiError> {
        let _ = self.bearer().await?;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Decide what the outgoing request should carry, refreshing if needed.
///
/// Pure orchestration over an injected refresh call so the contract is
/// testable off-browser: no token skips interception entirely; a fresh
/// token dispatches unmodified; a stale one joins the shared refresh
/// flight and dispatches with the rotated token.
pub(crate) async fn bearer_for_request<F, Fut>(
    auth: &Auth,
    token: Option<&str>,
    now: i64,
    flight: &SingleFlight<Result<TokenPair, ApiError>>,
    refresh: F,
) -> Result<Option<String>, ApiError>
where
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<TokenPair, ApiError>> + 'static,
{
    let Some(token) = token else {
        return Ok(None);
    };
    if token::is_fresh(token, now) {
        return Ok(Some(token.to_owned()));
    }

    let auth = auth.clone();
    let pair = flight.run(move || refresh_session(auth, now, refresh)).await?;
    Ok(Some(pair.access_token))
}

/// The refresh flight body: re-read the store first (another flight may
/// have rotated the pair already), then exchange the refresh token. A
/// failed exchange clears the session — the refresh credential is dead and
/// keeping the triple would just fail every subsequent request.
async fn refresh_session<F, Fut>(auth: Auth, now: i64, refresh: F) -> Result<TokenPair, ApiError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<TokenPair, ApiError>>,
{
    let Some(session) = auth.session() else {
        auth.logout();
        leptos::logging::warn!("token refresh with no stored session");
        return Err(ApiError::RefreshFailed("no stored session".to_owned()));
    };

    if token::is_fresh(&session.access_token, now) {
        return Ok(TokenPair {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
        });
    }

    match refresh(session.refresh_token).await {
        Ok(pair) => {
            auth.apply_refresh(&pair.access_token, &pair.refresh_token);
            Ok(pair)
        }
        Err(err) => {
            auth.logout();
            leptos::logging::warn!("token refresh failed: {err}");
            Err(ApiError::RefreshFailed(err.to_string()))
        }
    }
}

/// Exchange the refresh token at `POST /refresh-token`.
#[cfg(feature = "csr")]
async fn request_refresh(refresh_token: String) -> Result<TokenPair, ApiError> {
    let url = format!("{}/refresh-token", api_base());
    let request = gloo_net::http::Request::post(&url)
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let envelope: Envelope<TokenPair> = read_response(response).await?;
    Ok(envelope.data)
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn request_refresh(_refresh_token: String) -> Result<TokenPair, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

/// Map a server response to the expected payload or an [`ApiError`].
#[cfg(feature = "csr")]
pub(crate) async fn read_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}
