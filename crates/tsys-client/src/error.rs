//! Client error types.

use thiserror::Error;

/// Errors produced by the authenticated HTTP client.
///
/// This is the single place transport results become application errors;
/// callers never inspect raw responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An authenticated operation was attempted with no stored token.
    /// Raised before any network I/O happens.
    #[error("no authentication token found")]
    NotAuthenticated,

    /// HTTP transport error (connection refused, DNS, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a non-success status code. `message` is the
    /// plain-text body, the `message` field of a JSON body, or a generic
    /// fallback.
    #[error("API error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A success response could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error means the stored session is no longer usable.
    ///
    /// True for 401/403 responses and for the missing-token case. The ticket
    /// list commands use this to clear the session instead of just printing
    /// the message.
    #[must_use]
    pub const fn is_session_invalid(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::Server { status: 401 | 403, .. }
        )
    }
}
