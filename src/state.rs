//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only process-wide resources: typed config and the pooled HTTP
//! client. Session data never lives here; it is rebuilt per request.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::api::ApiClient;
use crate::config::PortalConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: PortalConfig, http: reqwest::Client) -> Self {
        Self { config: Arc::new(config), http }
    }

    /// Auth API client for the request carrying `headers`.
    #[must_use]
    pub fn api_for(&self, headers: &HeaderMap) -> ApiClient {
        ApiClient::for_request(self.http.clone(), &self.config.api_origin, headers)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
