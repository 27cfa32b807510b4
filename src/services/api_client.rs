// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// Turns wire responses into typed results. No storage, no navigation.
// ============================================================================

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::models::{DashboardStats, ErrorBody, LoginRequest, LoginResponse};
use crate::services::http::{BrowserTransport, HttpRequest, HttpResponse, HttpTransport};
use crate::utils::{DASHBOARD_STATS_ENDPOINT, LOGIN_ENDPOINT};

#[derive(Clone)]
pub struct ApiClient<T: HttpTransport = BrowserTransport> {
    config: AppConfig,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Client for the browser, using the compiled-in configuration
    pub fn new() -> Self {
        let config = crate::config::CONFIG.clone();
        let transport = BrowserTransport::new(config.request_timeout_ms());
        Self::with_transport(config, transport)
    }
}

impl Default for ApiClient<BrowserTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(config: AppConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.config.endpoint(LOGIN_ENDPOINT);
        let body = serde_json::to_string(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Serialize(e.to_string()))?;

        log::info!("🔐 [API] Login for user: {}", username);

        let response = self
            .transport
            .send(HttpRequest::post_json(url, body))
            .await?;
        decode(response)
    }

    /// `GET /api/reports/dashboard-stats` with the session's bearer token
    pub async fn fetch_dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        let url = self.config.endpoint(DASHBOARD_STATS_ENDPOINT);

        log::info!("📊 [API] Fetching dashboard stats");

        let response = self
            .transport
            .send(HttpRequest::get(url).bearer(token))
            .await?;
        decode(response)
    }
}

/// 2xx → typed body; anything else → `ApiError::Http` carrying the body's `error` field
fn decode<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|m| !m.trim().is_empty());
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }

    serde_json::from_str::<R>(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
