//! `/api/*` pass-through to the backend origin.
//!
//! The `/api` prefix is stripped: `/api/auth?x=1` is forwarded as
//! `{backend}/auth?x=1`. The upstream host replaces the incoming one, so the
//! backend sees its own origin.

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_PROXY_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::TE,
    header::TRAILER,
];

pub(crate) fn upstream_url(backend_origin: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{backend_origin}/{path}?{q}"),
        _ => format!("{backend_origin}/{path}"),
    }
}

pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in &HOP_BY_HOP {
        out.remove(name);
    }
    out
}

/// `ANY /api/{*path}`.
pub async fn proxy_api(State(state): State<AppState>, Path(path): Path<String>, req: Request) -> Response {
    let url = upstream_url(&state.config.backend_origin, &path, req.uri().query());
    let (parts, body) = req.into_parts();

    let body = match axum::body::to_bytes(body, MAX_PROXY_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "proxy request body rejected");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await;

    let resp = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, %url, "proxy upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    let headers = forwardable_headers(resp.headers());
    match resp.bytes().await {
        Ok(bytes) => (status, headers, Body::from(bytes)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %url, "proxy upstream body failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
