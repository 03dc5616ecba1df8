//! Local, non-verifying decode of the bearer token payload.
//!
//! The backend issues JWTs whose payload carries a `userId` field. The client
//! reads that field by base64url-decoding the middle token segment — no
//! signature verification, no server call. An invalid or tampered token is
//! only ever rejected by the server; this decode exists purely so the UI can
//! know "who am I" without an extra request.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::AuthError;

/// The payload fields the client cares about. Everything else in the token
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Decode the payload segment of `token` without verifying the signature.
///
/// # Errors
///
/// Returns `AuthError::MalformedToken` if the token has no payload segment,
/// the segment is not valid base64url, or the payload is not JSON.
pub fn decode(token: &str) -> Result<TokenClaims, AuthError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AuthError::MalformedToken("token has no payload segment".into()))?;

    // Tokens are unpadded base64url per RFC 7515; tolerate padding anyway.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::MalformedToken(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::MalformedToken(format!("payload is not JSON: {e}")))
}

/// Extract the current user's id from `token`.
///
/// # Errors
///
/// Returns `AuthError::MalformedToken` for undecodable tokens and
/// `AuthError::MissingUserId` when the payload lacks a `userId` field.
pub fn current_user_id(token: &str) -> Result<String, AuthError> {
    decode(token)?.user_id.ok_or(AuthError::MissingUserId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a structurally valid (unsigned) JWT around `payload_json`.
    fn fake_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn extracts_user_id_from_payload() {
        let token = fake_token(r#"{"userId":"u1","sub":"someone","exp":4102444800}"#);
        assert_eq!(current_user_id(&token).expect("should decode"), "u1");
    }

    #[test]
    fn missing_user_id_is_a_distinct_error() {
        let token = fake_token(r#"{"sub":"someone"}"#);
        let err = current_user_id(&token).unwrap_err();
        assert!(matches!(err, AuthError::MissingUserId));
        assert_eq!(err.to_string(), "user id not found in token");
    }

    #[test]
    fn token_without_payload_segment_fails() {
        let err = current_user_id("just-one-segment").unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken(_)));
    }

    #[test]
    fn garbage_payload_fails() {
        let err = current_user_id("aaa.%%%%.ccc").unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken(_)));
    }

    #[test]
    fn padded_payload_is_tolerated() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"userId":"u2"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(current_user_id(&token).expect("should decode"), "u2");
    }

    #[test]
    fn role_claim_is_optional() {
        let token = fake_token(r#"{"userId":"u1","role":"admin"}"#);
        let claims = decode(&token).expect("should decode");
        assert_eq!(claims.role.as_deref(), Some("admin"));

        let token = fake_token(r#"{"userId":"u1"}"#);
        let claims = decode(&token).expect("should decode");
        assert!(claims.role.is_none());
    }
}
