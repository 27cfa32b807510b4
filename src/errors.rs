//! Unified error types. Every service call returns a `Result`; callers decide
//! whether the error is shown inline or only logged.

use wasm_bindgen::JsValue;

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {}{}", .status, .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Transport-level failure (no HTTP response reached us)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// Message the server put in the `error` field, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Failures reading or writing the persisted session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("localStorage is not available")]
    StorageUnavailable,

    #[error("Could not write to storage: {0}")]
    Write(String),

    #[error("Stored user record is malformed: {0}")]
    CorruptUser(String),
}

/// Top-level error for the app shell. Converted to `JsValue` only at the
/// wasm entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("No #{0} element found")]
    MissingRoot(&'static str),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_server_message() {
        let err = ApiError::Http {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert!(!err.is_transport());

        let bare = ApiError::Http { status: 500, message: None };
        assert_eq!(bare.to_string(), "HTTP 500");
    }

    #[test]
    fn transport_errors() {
        assert!(ApiError::Timeout.is_transport());
        assert!(ApiError::Network("offline".into()).is_transport());
        assert!(!ApiError::Decode("eof".into()).is_transport());
    }

    #[test]
    fn app_error_messages() {
        assert_eq!(AppError::MissingRoot("app").to_string(), "No #app element found");
        assert_eq!(
            AppError::Dom("append failed".into()).to_string(),
            "DOM error: append failed"
        );
    }
}
