use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `tsys auth login`")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("user id not found in token")]
    MissingUserId,
}
