//! The client-held session: bearer token plus optionally cached role.
//!
//! This is the explicit session object the rest of the workspace passes
//! around instead of ambient global state. Reads and writes go through
//! [`login`] and [`logout`]; `is_authenticated` is derived as "token is
//! present". No expiry tracking happens here — an expired token is only
//! discovered when the server rejects a request.

use crate::error::AuthError;
use crate::token_store;

/// Snapshot of the persisted session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    /// Restore the prior session from persistent storage.
    #[must_use]
    pub fn load() -> Self {
        Self {
            token: token_store::load(),
            role: token_store::load_role(),
        }
    }

    /// A session is authenticated exactly when a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Borrow the token, failing when none is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no token is present.
    pub fn require_token(&self) -> Result<&str, AuthError> {
        self.token.as_deref().ok_or(AuthError::NotAuthenticated)
    }
}

/// Persist a fresh session. Storage is written synchronously so a later
/// process restores exactly this state.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if persistence fails.
pub fn login(token: &str, role: Option<&str>) -> Result<Session, AuthError> {
    token_store::store(token)?;
    match role {
        Some(role) => token_store::store_role(role)?,
        // A role-less login must not inherit the previous login's role.
        None => token_store::delete_role()?,
    }
    Ok(Session {
        token: Some(token.to_string()),
        role: role.map(str::to_string),
    })
}

/// Clear the persisted session (token and role).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
