pub mod admin;
pub mod auth;
pub mod project;
pub mod ticket;

use std::time::Duration;

use tsys_auth::Session;
use tsys_client::ApiClient;
use tsys_config::TsysConfig;

/// Build an API client carrying whatever session is currently stored.
///
/// A missing token is not an error here — anonymous auth commands work
/// without one, and authenticated operations fail with the proper
/// missing-token error inside the client.
pub(crate) fn api_client(config: &TsysConfig) -> ApiClient {
    let session = Session::load();
    ApiClient::with_timeout(
        config.api.origin(),
        session.token,
        Duration::from_secs(config.api.timeout_secs),
    )
}
