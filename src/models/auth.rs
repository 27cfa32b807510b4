use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Error body returned with non-2xx statuses (`error` may be missing)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// User record as returned by the auth endpoint. Only `fullName` is read;
/// every other field is kept so the stored record round-trips untouched.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn with_full_name(full_name: &str) -> Self {
        Self {
            full_name: Some(full_name.to_string()),
            extra: Map::new(),
        }
    }

    /// Name to greet the user with, if the record has a non-blank one
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_keeps_unknown_user_fields() {
        let json = r#"{"token":"abc123","user":{"fullName":"Admin User","role":"admin","id":7}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc123");
        assert_eq!(response.user.display_name(), Some("Admin User"));
        assert_eq!(response.user.extra.get("role"), Some(&Value::from("admin")));

        let stored = serde_json::to_value(&response.user).unwrap();
        assert_eq!(stored["fullName"], "Admin User");
        assert_eq!(stored["id"], 7);
    }

    #[test]
    fn user_without_name_has_no_display_name() {
        let user: User = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(user.display_name(), None);
        assert_eq!(User::with_full_name("   ").display_name(), None);
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
    }
}
