//! Auth request/response payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/auth/login`. `login` accepts username or email.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub password: String,
}

/// Response from `POST /api/auth/login` — the opaque bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Payload for `POST /api/auth/request-password-reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequestPasswordReset {
    pub login: String,
}

/// Payload for `POST /api/auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPassword {
    pub code: String,
    pub new_password: String,
}

/// Payload for `POST /api/auth/change-password` (authenticated).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}
