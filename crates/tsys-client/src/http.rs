//! Shared HTTP response normalization.
//!
//! Centralizes the status check and error-message extraction so resource
//! modules stay focused on request construction and response mapping. The
//! rules, in order:
//! - 2xx → response passed through unchanged (204 keeps its empty body);
//! - non-2xx with a JSON body → the body's `message` field, or the body
//!   itself when it is a JSON string;
//! - non-2xx with a plain-text body → the body text;
//! - anything else → a generic fallback.

use crate::error::ApiError;

const FALLBACK_MESSAGE: &str = "request failed";

/// Check an HTTP response, converting non-success statuses into
/// [`ApiError::Server`] with a human-readable message.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let json = is_json(&resp);
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status,
        message: extract_message(json, &body),
    })
}

/// Whether the response declares a JSON body.
pub(crate) fn is_json(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Extract a displayable message from an error body.
fn extract_message(json: bool, body: &str) -> String {
    if json {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(s)) if !s.is_empty() => return s,
            Ok(value) => {
                if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                    if !message.is_empty() {
                        return message.to_string();
                    }
                }
            }
            Err(_) => {}
        }
        return FALLBACK_MESSAGE.to_string();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}
