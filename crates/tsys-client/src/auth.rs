//! Auth resource client: `/api/auth`.
//!
//! Login, register, and the password-reset pair are anonymous by design —
//! no session exists yet when they are called. Change-password and get-role
//! require the bearer token like every other resource.

use reqwest::Method;

use tsys_core::auth::{
    ChangePassword, LoginRequest, RegisterRequest, RequestPasswordReset, ResetPassword,
    TokenResponse,
};

use crate::{ApiClient, ApiError, Auth, http};

impl ApiClient {
    /// `POST /api/auth/login` — exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the credentials are
    /// rejected.
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.request_json(Method::POST, "/api/auth/login", Some(req), Auth::Anonymous)
            .await
    }

    /// `POST /api/auth/register`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or validation fails
    /// server-side.
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/api/auth/register", Some(req), Auth::Anonymous)
            .await
    }

    /// `POST /api/auth/request-password-reset`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn request_password_reset(
        &self,
        req: &RequestPasswordReset,
    ) -> Result<(), ApiError> {
        self.request_unit(
            Method::POST,
            "/api/auth/request-password-reset",
            Some(req),
            Auth::Anonymous,
        )
        .await
    }

    /// `POST /api/auth/reset-password` — completes a reset with the emailed
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the code is rejected.
    pub async fn reset_password(&self, req: &ResetPassword) -> Result<(), ApiError> {
        self.request_unit(
            Method::POST,
            "/api/auth/reset-password",
            Some(req),
            Auth::Anonymous,
        )
        .await
    }

    /// `POST /api/auth/change-password` (authenticated).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored, the request fails, or the
    /// old password is rejected.
    pub async fn change_password(&self, req: &ChangePassword) -> Result<(), ApiError> {
        self.request_unit(
            Method::POST,
            "/api/auth/change-password",
            Some(req),
            Auth::Bearer,
        )
        .await
    }

    /// `GET /api/auth/get-role` — the current user's role as a bare string.
    ///
    /// The backend may answer with a plain-text body or a JSON string; both
    /// normalize to the same value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no token is stored or the request fails.
    pub async fn get_role(&self) -> Result<String, ApiError> {
        let resp = self
            .send(Method::GET, "/api/auth/get-role", None::<&()>, Auth::Bearer)
            .await?;
        let resp = http::check_response(resp).await?;

        if http::is_json(&resp) {
            let value: serde_json::Value = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            return match value {
                serde_json::Value::String(role) => Ok(role),
                other => Err(ApiError::Decode(format!(
                    "expected a role string, got: {other}"
                ))),
            };
        }

        Ok(resp.text().await?.trim().to_string())
    }
}
