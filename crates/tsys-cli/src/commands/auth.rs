//! `tsys auth <subcommand>` handlers.

use serde::Serialize;

use tsys_auth::{Session, claims, session, token_store};
use tsys_config::TsysConfig;
use tsys_core::auth::{
    ChangePassword, LoginRequest, RegisterRequest, RequestPasswordReset, ResetPassword,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::commands::api_client;
use crate::output::output;

pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &TsysConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login(&args.login, &args.password, flags, config).await,
        AuthCommands::Logout => logout(flags),
        AuthCommands::Status => status(flags),
        AuthCommands::Register(args) => {
            let req = RegisterRequest {
                username: args.username.clone(),
                email: args.email.clone(),
                name: args.name.clone(),
                surname: args.surname.clone(),
                password: args.password.clone(),
            };
            api_client(config).register(&req).await?;
            output(&StatusOnly { ok: true }, flags.format)
        }
        AuthCommands::RequestReset(args) => {
            let req = RequestPasswordReset {
                login: args.login.clone(),
            };
            api_client(config).request_password_reset(&req).await?;
            output(&StatusOnly { ok: true }, flags.format)
        }
        AuthCommands::Reset(args) => {
            let req = ResetPassword {
                code: args.code.clone(),
                new_password: args.new_password.clone(),
            };
            api_client(config).reset_password(&req).await?;
            output(&StatusOnly { ok: true }, flags.format)
        }
        AuthCommands::ChangePassword(args) => {
            let req = ChangePassword {
                old_password: args.old_password.clone(),
                new_password: args.new_password.clone(),
            };
            api_client(config).change_password(&req).await?;
            output(&StatusOnly { ok: true }, flags.format)
        }
        AuthCommands::Whoami => whoami(flags),
    }
}

#[derive(Serialize)]
struct StatusOnly {
    ok: bool,
}

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: Option<String>,
    role: Option<String>,
}

/// Exchange credentials for a token, fetch the role with the fresh token,
/// and persist both. A failing role lookup downgrades to a token-only
/// session rather than failing the login.
async fn login(
    login: &str,
    password: &str,
    flags: &GlobalFlags,
    config: &TsysConfig,
) -> anyhow::Result<()> {
    let req = LoginRequest {
        login: login.to_string(),
        password: password.to_string(),
    };
    let token = api_client(config).login(&req).await?.token;

    let authed = api_client(config).with_token(token.clone());
    let role = match authed.get_role().await {
        Ok(role) => Some(role),
        Err(error) => {
            tracing::warn!(%error, "role lookup failed; storing token without a role");
            None
        }
    };

    session::login(&token, role.as_deref())?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: claims::current_user_id(&token).ok(),
            role,
        },
        flags.format,
    )
}

fn logout(flags: &GlobalFlags) -> anyhow::Result<()> {
    session::logout()?;
    output(
        &AuthLoginResponse {
            authenticated: false,
            user_id: None,
            role: None,
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<String>,
    user_id: Option<String>,
    role: Option<String>,
}

fn status(flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = Session::load();
    let user_id = session
        .token
        .as_deref()
        .and_then(|token| claims::current_user_id(token).ok());

    output(
        &AuthStatusResponse {
            authenticated: session.is_authenticated(),
            token_source: token_store::detect_token_source(),
            user_id,
            role: session.role,
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct WhoamiResponse {
    user_id: String,
}

fn whoami(flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = Session::load();
    let token = session.require_token()?;
    let user_id = claims::current_user_id(token)?;
    output(&WhoamiResponse { user_id }, flags.format)
}
