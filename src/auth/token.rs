//! Local JWT expiry checks.
//!
//! The access token's payload is decoded in place (no signature
//! verification, no server round trip) just to read the `exp` claim. This
//! trades a small clock-skew window for avoiding a network call per request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    exp: i64,
}

/// Decode the expiry claim (Unix seconds) from a JWT access token.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url JSON payload carrying `exp`.
pub fn expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

/// Whether the token still has at least one second of validity left.
///
/// An undecodable token counts as expired, so the caller's refresh attempt
/// either repairs the session or clears it.
pub fn is_fresh(token: &str, now: i64) -> bool {
    expiry(token).is_some_and(|exp| exp - now >= 1)
}

/// Current Unix time in seconds.
pub fn unix_now() -> i64 {
    #[cfg(feature = "csr")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}
