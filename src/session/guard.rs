//! Admin route guard.
//!
//! A two-state decision over already-loaded session state. It never fetches;
//! the bootstrap must have run for the current request first.

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};

use super::SessionState;

/// Where visitors without an admin session are sent.
pub const ADMIN_LOGIN_PATH: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    Redirected { target: &'static str, status: StatusCode },
}

/// Decide whether navigation to an admin-protected route may proceed.
#[must_use]
pub fn guard_admin(state: &SessionState) -> GuardOutcome {
    if state.admin().is_some() {
        GuardOutcome::Allowed
    } else {
        GuardOutcome::Redirected { target: ADMIN_LOGIN_PATH, status: StatusCode::FOUND }
    }
}

/// Redirect response for a `Redirected` outcome. Axum's `Redirect` has no
/// 302 constructor, so the response is assembled by hand.
#[must_use]
pub fn redirect_response(target: &'static str, status: StatusCode) -> Response {
    (status, [(LOCATION, target)]).into_response()
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
