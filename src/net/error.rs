//! Failure classes surfaced by the API layer.
//!
//! UI-facing failures (login, form submissions) are caught at the call site
//! and turned into user-visible messages; infrastructure failures (a dead
//! refresh token) propagate up through the failed request instead of being
//! swallowed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Server replied with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// Nothing reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// The access token expired and exchanging the refresh token failed.
    /// The session has already been cleared when this is returned.
    #[error("session refresh failed: {0}")]
    RefreshFailed(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// User-facing message for a failed login attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            status: 400,
            message,
        } => {
            if message.is_empty() {
                "Invalid request data".to_owned()
            } else {
                message.clone()
            }
        }
        ApiError::Status { status: 401, .. } => "Invalid email or password".to_owned(),
        ApiError::Status { status: 403, .. } => {
            "Access denied. Please check your permissions.".to_owned()
        }
        ApiError::Status { status: 404, .. } => "Login service not found".to_owned(),
        ApiError::Status { status: 500, .. } => {
            "Server error. Please try again later.".to_owned()
        }
        ApiError::Status { message, .. } => {
            if message.is_empty() {
                "An unexpected error occurred".to_owned()
            } else {
                message.clone()
            }
        }
        ApiError::Network(_) => {
            "Network error. Please check your internet connection.".to_owned()
        }
        ApiError::RefreshFailed(_) | ApiError::Decode(_) => {
            "An unexpected error occurred. Please try again.".to_owned()
        }
    }
}
