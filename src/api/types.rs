//! Auth API wire types and errors.
//!
//! Field names mirror the Auth API's JSON exactly. A missing or `null`
//! payload deserializes to `None`, which means "no session", not an error.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Auth API calls. None of these are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("auth api request failed: {0}")]
    Request(String),

    /// The Auth API answered with a non-success status.
    #[error("auth api responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("auth api response parse failed: {0}")]
    Decode(String),
}

// =============================================================================
// SESSION RECORDS
// =============================================================================

/// The authenticated user as reported by `GET /api/auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "UserID")]
    pub id: String,
    #[serde(rename = "UserFirstName")]
    pub first_name: String,
    #[serde(rename = "UserLastName")]
    pub last_name: String,
    #[serde(rename = "UserImage")]
    pub image: String,
    #[serde(rename = "DepartmentID")]
    pub department_id: String,
    #[serde(rename = "Role")]
    pub role: String,
}

impl SessionUser {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// The authenticated admin as reported by `GET /api/admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAdmin {
    pub id: i64,
    pub username: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub auth: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub admin: Option<SessionAdmin>,
}

#[derive(Debug, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Result of a successful `GET /api/logout`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logout {
    /// Server-provided text for the success notice.
    pub message: String,
    /// Raw `Set-Cookie` values from the Auth API, relayed to the browser.
    pub set_cookies: Vec<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
