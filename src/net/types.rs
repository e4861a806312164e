//! Wire types for the backend REST API.
//!
//! The backend wraps payloads in a `{ message, data }` envelope and uses
//! camelCase field names throughout.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Mutation acknowledgement where only the message matters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /login` request body. The role travels as a numeric string code.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// `POST /login` response payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub refresh_token: String,
    pub role: String,
}

/// `POST /refresh-token` request body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// `POST /refresh-token` response payload: the rotated credential pair.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// `GET /users/me` and `GET /users/teachers` payload. Role-specific fields
/// are simply absent for other roles.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role_name: Option<String>,
    // Student fields
    pub student_id: Option<String>,
    pub intake_year: Option<String>,
    pub programme: Option<String>,
    pub enrolled_courses: Vec<CourseWithTeachers>,
    // Teacher fields
    pub teacher_id: Option<String>,
    pub department: Option<String>,
    pub teaching_courses: Vec<Course>,
}

impl UserDetails {
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_owned()
    }
}

/// `POST /register` request body. Optional fields are omitted from the
/// JSON entirely when absent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_year: Option<String>,
}

/// `PUT /updateUser/{id}` request body. The password is only sent when the
/// form provided a replacement.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub course_code: String,
    pub course_name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseWithTeachers {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub teachers: Vec<TeacherSummary>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherSummary {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

/// `POST /api/feedback/...` request body: free text assembled from the
/// questionnaire, consumed by the sentiment model server-side.
#[derive(Clone, Debug, Serialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

/// `GET /api/analytics/courses/feedback/summary` row: per-course sentiment
/// counts.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseFeedbackSummary {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub feedback_count: i64,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}
