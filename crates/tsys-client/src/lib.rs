//! # tsys-client
//!
//! Authenticated HTTP client and REST resource clients for the tsys backend.
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the backend origin and an
//! optional bearer token. Resource modules add one method per REST operation:
//! - auth: login, register, password reset/change, get-role
//! - projects: list, get, create, update, patch, delete
//! - tickets: per-project CRUD plus "my assigned tickets"
//! - admin: JSON export download, test-data generation
//!
//! All response normalization (content-type sniffing, 204 handling, error
//! message extraction) lives in [`http`]; callers only ever see typed values
//! or [`ApiError`].

pub mod admin;
pub mod auth;
pub mod projects;
pub mod tickets;

mod error;
mod http;

pub use error::ApiError;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Whether a request carries the bearer token.
///
/// The auth endpoints that exist before any session does (login, register,
/// password reset) are the only anonymous callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Bearer,
    Anonymous,
}

/// HTTP client for the tsys backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` with a default 10 s request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_timeout(base_url, token, std::time::Duration::from_secs(10))
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::builder()
                .user_agent("tsys/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Replace the stored token (used right after login, before the session
    /// store has been re-read).
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue a request. Fails with [`ApiError::NotAuthenticated`] before any
    /// network I/O when `auth` requires a token and none is stored.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if auth == Auth::Bearer {
            let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "sending request");
        Ok(request.send().await?)
    }

    /// Request expecting a JSON body on success.
    pub(crate) async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body, auth).await?;
        let resp = http::check_response(resp).await?;
        if resp.status() == reqwest::StatusCode::NO_CONTENT {
            return Err(ApiError::Decode("server returned 204 with no body".into()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Request where any success (including 204) yields `()` and the body is
    /// discarded.
    pub(crate) async fn request_unit<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<(), ApiError> {
        let resp = self.send(method, path, body, auth).await?;
        http::check_response(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8080/", None);
        assert_eq!(client.url("/api/projects"), "http://localhost:8080/api/projects");
    }

    #[test]
    fn with_token_sets_the_token() {
        let client = ApiClient::new("http://localhost:8080", None).with_token("tok-1");
        assert_eq!(client.token(), Some("tok-1"));
    }

    #[tokio::test]
    async fn bearer_request_without_token_fails_before_network() {
        // Unroutable origin: if the client tried the network this would hang
        // or yield a transport error, not NotAuthenticated.
        let client = ApiClient::new("http://192.0.2.1:9", None);
        let err = client
            .send(reqwest::Method::GET, "/api/projects", None::<&()>, Auth::Bearer)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn anonymous_request_skips_token_check() {
        let client = ApiClient::with_timeout(
            "http://127.0.0.1:1",
            None,
            std::time::Duration::from_millis(200),
        );
        // No listener on port 1 — expect a transport error, proving the
        // request was actually attempted.
        let err = client
            .send(
                reqwest::Method::POST,
                "/api/auth/login",
                Some(&serde_json::json!({"login": "a", "password": "b"})),
                Auth::Anonymous,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
