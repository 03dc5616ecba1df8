//! # tsys-auth
//!
//! Session persistence and local token decoding for the tsys client.
//!
//! Provides tiered bearer-token storage (OS keychain via `keyring`, env var,
//! `~/.tsys/credentials` file fallback), a cached-role file, the explicit
//! [`Session`] object, and the non-verifying JWT payload decode that extracts
//! the current user id.

pub mod claims;
pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::Session;
