//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page routes sit behind the session bootstrap; admin-protected pages are
//! additionally nested behind the guard, which therefore always sees a
//! populated session. `/logout` and `/api/*` never bootstrap: logout only
//! talks to `/api/logout`, and the proxy forwards requests untouched.

pub mod middleware;
pub mod pages;
pub mod proxy;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Pages that render with a bootstrapped session.
fn page_routes(state: AppState) -> Router<AppState> {
    let admin_only = Router::new()
        .route("/admin/dashboard", get(pages::admin_dashboard))
        .route_layer(axum::middleware::from_fn(middleware::admin_only));

    Router::new()
        .route("/", get(pages::home))
        .route("/admin", get(pages::admin_landing))
        .merge(admin_only)
        .route_layer(axum::middleware::from_fn_with_state(state, middleware::bootstrap_session))
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(page_routes(state.clone()))
        .route("/logout", get(pages::logout))
        .route("/ui/mobile-menu/toggle", post(pages::toggle_menu))
        .route("/ui/mobile-menu/close", post(pages::close_menu))
        .route("/api/{*path}", any(proxy::proxy_api))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
