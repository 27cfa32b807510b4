// ============================================================================
// CONFIG - Compile-time configuration (option_env! + .env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Single base URL for every backend endpoint (auth + reports)
    pub api_base_url: String,
    pub request_timeout_seconds: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Load the configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("REQUEST_TIMEOUT_SECONDS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Build from raw values, falling back to defaults on missing or unparsable input
    pub fn from_values(
        api_base_url: Option<&str>,
        request_timeout_seconds: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            request_timeout_seconds: request_timeout_seconds
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout_seconds),
            enable_logging: enable_logging
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Absolute URL for an API path such as `/api/auth/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request_timeout_ms(&self) -> u32 {
        self.request_timeout_seconds.saturating_mul(1000)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
