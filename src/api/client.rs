//! Cookie-forwarding Auth API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page renders call the Auth API on the visitor's behalf. The only
//! credential is the visitor's session cookie, so the client copies the
//! incoming `Cookie` header onto every outgoing request.
//!
//! TRADE-OFFS
//! ==========
//! No retry and no timeout. A failed call surfaces immediately as an
//! `ApiError`; a hung upstream holds the render until it answers.

use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;

use super::types::{AdminResponse, ApiError, AuthResponse, Logout, LogoutResponse, SessionAdmin, SessionUser};
use super::{ADMIN_PATH, AUTH_PATH, AuthApi, LOGOUT_PATH};

/// Auth API client bound to one base origin and one caller's cookie.
///
/// Cheap to build: the connection pool lives in the shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_origin: String,
    cookie: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_origin: impl Into<String>, cookie: Option<String>) -> Self {
        let base_origin = base_origin.into().trim_end_matches('/').to_owned();
        Self { http, base_origin, cookie }
    }

    /// Build a client for the request whose headers are given, forwarding its
    /// `Cookie` header (if any) on every call.
    #[must_use]
    pub fn for_request(http: reqwest::Client, base_origin: &str, headers: &HeaderMap) -> Self {
        Self::new(http, base_origin, forwarded_cookie(headers))
    }

    #[must_use]
    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_origin)
    }

    async fn send_get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let mut req = self.http.get(self.url(path));
        if let Some(cookie) = &self.cookie {
            req = req.header(COOKIE, cookie);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send_get(path).await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Join all `Cookie` headers of a request into one header value.
pub(crate) fn forwarded_cookie(headers: &HeaderMap) -> Option<String> {
    let parts: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn fetch_auth(&self) -> Result<Option<SessionUser>, ApiError> {
        let body: AuthResponse = self.get_json(AUTH_PATH).await?;
        Ok(body.auth)
    }

    async fn fetch_admin(&self) -> Result<Option<SessionAdmin>, ApiError> {
        let body: AdminResponse = self.get_json(ADMIN_PATH).await?;
        Ok(body.admin)
    }

    async fn logout(&self) -> Result<Logout, ApiError> {
        let resp = self.send_get(LOGOUT_PATH).await?;
        let set_cookies = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect();
        let body: LogoutResponse = decode(resp).await?;
        Ok(Logout { message: body.message, set_cookies })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
