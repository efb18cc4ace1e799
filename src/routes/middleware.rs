//! Request middleware for page routes: session bootstrap and admin guard.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use crate::session::SessionState;
use crate::session::bootstrap::load_session;
use crate::session::guard::{GuardOutcome, guard_admin, redirect_response};
use crate::state::AppState;
use crate::views;

/// Load the caller's session before the page handler runs and expose it as
/// an `Extension<SessionState>`. Any lookup failure fails the whole render.
pub async fn bootstrap_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let api = state.api_for(req.headers());
    match load_session(&api).await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %req.uri().path(),
                origin = api.base_origin(),
                has_cookie = api.cookie().is_some(),
                "session bootstrap failed"
            );
            bad_gateway_page()
        }
    }
}

/// Gate admin-protected routes on the bootstrapped `admin` slot.
pub async fn admin_only(req: Request, next: Next) -> Response {
    let outcome = match req.extensions().get::<SessionState>() {
        Some(session) => guard_admin(session),
        None => guard_admin(&SessionState::new()),
    };
    match outcome {
        GuardOutcome::Allowed => next.run(req).await,
        GuardOutcome::Redirected { target, status } => {
            tracing::debug!(path = %req.uri().path(), %target, "admin guard redirect");
            redirect_response(target, status)
        }
    }
}

pub(crate) fn bad_gateway_page() -> Response {
    (StatusCode::BAD_GATEWAY, Html(views::error_page(502, "Session lookup failed"))).into_response()
}
