//! Wire types shared with the Gatekeeper API.

use chrono::{DateTime, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access scope attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserScope {
    Admin,
    User,
}

impl UserScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserScope::Admin => "admin",
            UserScope::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserScope::Admin),
            "user" => Some(UserScope::User),
            _ => None,
        }
    }
}

/// Row shape returned by `GET /admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub scope: UserScope,
    pub active: bool,
}

/// Full record returned by `GET /admin/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub email: String,
    pub scope: UserScope,
    pub active: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub banned_until: Option<DateTime<Utc>>,
}

/// Partial update for `PATCH /admin/users/{id}`. The server leaves absent
/// fields untouched, so `None` must serialize to a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<UserScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UserPatch {
    pub fn scope(scope: UserScope) -> Self {
        Self {
            scope: Some(scope),
            active: None,
        }
    }

    pub fn active(active: bool) -> Self {
        Self {
            scope: None,
            active: Some(active),
        }
    }
}

/// Body for `POST /admin/users/{id}/ban`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanUserRequest {
    pub reason: String,
    /// Expiry token: `"x"` for no expiry, otherwise `"<amount>:<unit>"`.
    pub expire: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Error payload returned by the API. Client-side failures are folded into
/// the same shape so callers handle a single error type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_serializes_only_present_fields() {
        let scope_only = serde_json::to_value(UserPatch::scope(UserScope::Admin)).unwrap();
        assert_eq!(scope_only, json!({"scope": "admin"}));

        let active_only = serde_json::to_value(UserPatch::active(false)).unwrap();
        assert_eq!(active_only, json!({"active": false}));

        let empty = serde_json::to_value(UserPatch::default()).unwrap();
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn scope_parses_its_wire_names() {
        assert_eq!(UserScope::parse("admin"), Some(UserScope::Admin));
        assert_eq!(UserScope::parse("user"), Some(UserScope::User));
        assert_eq!(UserScope::parse("root"), None);
        assert_eq!(UserScope::Admin.as_str(), "admin");
    }

    #[test]
    fn detail_tolerates_missing_optional_fields() {
        let detail: UserDetail = serde_json::from_value(json!({
            "id": 7,
            "email": "user@example.com",
            "scope": "user",
            "active": true,
            "created_at": "2026-01-15T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(detail.description, None);
        assert_eq!(detail.banned_until, None);
    }

    #[test]
    fn error_displays_its_message() {
        let error = ApiError::validation("email is required");
        assert_eq!(error.to_string(), "email is required");
        assert_eq!(error.code, "VALIDATION_ERROR");
        let message: String = ApiError::request_failed("connection refused").into();
        assert_eq!(message, "connection refused");
    }

    #[test]
    fn error_payload_round_trips_without_details() {
        let payload = serde_json::to_value(ApiError::unknown("boom")).unwrap();
        assert_eq!(payload, json!({"error": "boom", "code": "UNKNOWN"}));
    }
}
