//! Typed wrappers over the backend REST endpoints.
//!
//! Everything except `login` goes through an [`ApiClient`] and therefore
//! gets the bearer header and refresh-on-expiry for free. Off-browser
//! builds get stub errors instead of network calls, mirroring how the rest
//! of the crate degrades outside the browser.

#![allow(clippy::unused_async)]

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{
    Ack, Course, CourseFeedbackSummary, CoursePayload, Envelope, FeedbackRequest, LoginData,
    LoginRequest, RegisterRequest, UpdateUserRequest, UserDetails,
};

/// `POST /login`. Unauthenticated; the role travels as a numeric code.
pub async fn login(email: &str, password: &str, role_code: &str) -> Result<LoginData, ApiError> {
    let body = LoginRequest {
        email: email.to_owned(),
        password_hash: password.to_owned(),
        role: role_code.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/login", crate::net::client::api_base());
        let request = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<LoginData> = crate::net::client::read_response(response).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET /users/me` — profile of the logged-in user.
pub async fn current_user(api: &ApiClient) -> Result<UserDetails, ApiError> {
    let envelope: Envelope<UserDetails> = api.get("/users/me").await?;
    Ok(envelope.data)
}

/// `GET /users/teachers` — all teacher accounts.
pub async fn teachers(api: &ApiClient) -> Result<Vec<UserDetails>, ApiError> {
    let envelope: Envelope<Vec<UserDetails>> = api.get("/users/teachers").await?;
    Ok(envelope.data)
}

/// `POST /register` — create a user account (teacher or student).
pub async fn register_user(api: &ApiClient, user: &RegisterRequest) -> Result<Ack, ApiError> {
    api.post("/register", user).await
}

/// `PUT /updateUser/{id}`.
pub async fn update_user(
    api: &ApiClient,
    id: i64,
    update: &UpdateUserRequest,
) -> Result<Ack, ApiError> {
    api.put(&format!("/updateUser/{id}"), update).await
}

/// `DELETE /deleteUser/{id}`.
pub async fn delete_user(api: &ApiClient, id: i64) -> Result<Ack, ApiError> {
    api.delete(&format!("/deleteUser/{id}")).await
}

/// `GET /api/courses`.
pub async fn courses(api: &ApiClient) -> Result<Vec<Course>, ApiError> {
    let envelope: Envelope<Vec<Course>> = api.get("/api/courses").await?;
    Ok(envelope.data)
}

/// `POST /api/courses`.
pub async fn create_course(api: &ApiClient, course: &CoursePayload) -> Result<Ack, ApiError> {
    api.post("/api/courses", course).await
}

/// `PUT /api/courses/{id}`.
pub async fn update_course(
    api: &ApiClient,
    id: i64,
    course: &CoursePayload,
) -> Result<Ack, ApiError> {
    api.put(&format!("/api/courses/{id}"), course).await
}

/// `DELETE /api/courses/{id}`.
pub async fn delete_course(api: &ApiClient, id: i64) -> Result<Ack, ApiError> {
    api.delete(&format!("/api/courses/{id}")).await
}

/// `POST /api/feedback/course/{id}` — free-text questionnaire result.
pub async fn submit_course_feedback(
    api: &ApiClient,
    course_id: i64,
    feedback: String,
) -> Result<Ack, ApiError> {
    api.post(&format!("/api/feedback/course/{course_id}"), &FeedbackRequest { feedback })
        .await
}

/// `POST /api/feedback/teacher/{id}`.
pub async fn submit_teacher_feedback(
    api: &ApiClient,
    teacher_id: i64,
    feedback: String,
) -> Result<Ack, ApiError> {
    api.post(&format!("/api/feedback/teacher/{teacher_id}"), &FeedbackRequest { feedback })
        .await
}

/// `GET /api/analytics/courses/feedback/summary` — per-course sentiment
/// counts for the analytics dashboard.
pub async fn course_feedback_summary(
    api: &ApiClient,
) -> Result<Vec<CourseFeedbackSummary>, ApiError> {
    let envelope: Envelope<Vec<CourseFeedbackSummary>> =
        api.get("/api/analytics/courses/feedback/summary").await?;
    Ok(envelope.data)
}
