use super::*;

/// Unsigned test token with the given payload claims.
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.sig")
}

fn token_expiring_at(exp: i64) -> String {
    token_with_payload(&format!(r#"{{"sub":"u-1","exp":{exp}}}"#))
}

#[test]
fn expiry_reads_exp_claim() {
    assert_eq!(expiry(&token_expiring_at(1_700_000_000)), Some(1_700_000_000));
}

#[test]
fn expiry_rejects_garbage() {
    assert_eq!(expiry(""), None);
    assert_eq!(expiry("not-a-token"), None);
    assert_eq!(expiry("a.!!!.c"), None);
    // Valid base64, but the payload is not JSON.
    let bad = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
    assert_eq!(expiry(&bad), None);
}

#[test]
fn expiry_requires_exp_claim() {
    assert_eq!(expiry(&token_with_payload(r#"{"sub":"u-1"}"#)), None);
}

#[test]
fn token_with_future_expiry_is_fresh() {
    let token = token_expiring_at(1_000_000);
    assert!(is_fresh(&token, 999_000));
    // Exactly one second left still counts.
    assert!(is_fresh(&token, 999_999));
}

#[test]
fn token_at_or_past_expiry_is_stale() {
    let token = token_expiring_at(1_000_000);
    assert!(!is_fresh(&token, 1_000_000));
    assert!(!is_fresh(&token, 1_000_001));
}

#[test]
fn undecodable_token_is_stale() {
    assert!(!is_fresh("corrupted", 0));
}
