//! Auth API access.
//!
//! DESIGN
//! ======
//! `AuthApi` is the seam between session orchestration and transport. The
//! production implementation is [`client::ApiClient`], built per request so
//! the caller's cookie rides along on every call; tests substitute mocks.

pub mod client;
pub mod types;

pub use client::ApiClient;
use types::{ApiError, Logout, SessionAdmin, SessionUser};

pub const AUTH_PATH: &str = "/api/auth";
pub const ADMIN_PATH: &str = "/api/admin";
pub const LOGOUT_PATH: &str = "/api/logout";

/// Session lookups against the Auth API.
///
/// `Ok(None)` from the fetch methods is the normal "not signed in" answer.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `GET /api/auth`.
    async fn fetch_auth(&self) -> Result<Option<SessionUser>, ApiError>;

    /// `GET /api/admin`.
    async fn fetch_admin(&self) -> Result<Option<SessionAdmin>, ApiError>;

    /// `GET /api/logout`.
    async fn logout(&self) -> Result<Logout, ApiError>;
}
