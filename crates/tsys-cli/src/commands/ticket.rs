//! `tsys ticket <subcommand>` handlers.
//!
//! The list commands are where a dead session is detected and cleaned up:
//! a 401/403 (or a missing token) clears the stored credentials and tells
//! the user to log in again, instead of just echoing the server's message.

use serde::Serialize;

use tsys_auth::session;
use tsys_client::ApiError;
use tsys_config::TsysConfig;
use tsys_core::Ticket;
use tsys_core::ticket::TicketRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::cli::subcommands::ticket::{TicketUpdateArgs, TicketWriteArgs};
use crate::commands::api_client;
use crate::output::output;

pub async fn handle(
    action: &TicketCommands,
    flags: &GlobalFlags,
    config: &TsysConfig,
) -> anyhow::Result<()> {
    let client = api_client(config);
    match action {
        TicketCommands::List(args) => {
            let tickets = clear_session_if_invalid(client.list_tickets(&args.project).await)?;
            output(&tickets, flags.format)
        }
        TicketCommands::Mine => {
            let tickets = clear_session_if_invalid(client.list_assigned_tickets().await)?;
            output(&tickets, flags.format)
        }
        TicketCommands::Get(args) => {
            let ticket = client.get_ticket(&args.project, &args.id).await?;
            output(&ticket, flags.format)
        }
        TicketCommands::Create(args) => {
            let ticket = client
                .create_ticket(&args.project, &write_request(args))
                .await?;
            output(&ticket, flags.format)
        }
        TicketCommands::Update(args) => {
            let ticket = client
                .update_ticket(&args.project, &args.id, &update_request(args))
                .await?;
            output(&ticket, flags.format)
        }
        TicketCommands::Patch(args) => {
            let ticket = client
                .patch_ticket(&args.project, &args.id, &update_request(args))
                .await?;
            output(&ticket, flags.format)
        }
        TicketCommands::Delete(args) => {
            client.delete_ticket(&args.project, &args.id).await?;
            output(
                &DeleteResponse {
                    deleted: true,
                    id: args.id.clone(),
                },
                flags.format,
            )
        }
    }
}

#[derive(Serialize)]
struct DeleteResponse {
    deleted: bool,
    id: String,
}

/// On a session-invalidating error, drop the stored credentials before
/// reporting, so the next command starts from a clean logged-out state.
fn clear_session_if_invalid(result: Result<Vec<Ticket>, ApiError>) -> anyhow::Result<Vec<Ticket>> {
    match result {
        Ok(tickets) => Ok(tickets),
        Err(error) if error.is_session_invalid() => {
            if let Err(cleanup) = session::logout() {
                tracing::warn!(%cleanup, "failed to clear invalid session");
            }
            Err(session_cleared_error(&error))
        }
        Err(error) => Err(error.into()),
    }
}

fn session_cleared_error(error: &ApiError) -> anyhow::Error {
    anyhow::anyhow!("{error}\nsession cleared — run `tsys auth login`")
}

fn write_request(args: &TicketWriteArgs) -> TicketRequest {
    TicketRequest {
        name: Some(args.name.clone()),
        description: args.description.clone(),
        kind: args.kind.map(|k| k.to_string()),
        priority: args.priority.map(|p| p.to_string()),
        state: args.state.map(|s| s.to_string()),
        assigned_user_id: args.assignee.clone(),
    }
}

fn update_request(args: &TicketUpdateArgs) -> TicketRequest {
    TicketRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        kind: args.kind.map(|k| k.to_string()),
        priority: args.priority.map(|p| p.to_string()),
        state: args.state.map(|s| s.to_string()),
        assigned_user_id: args.assignee.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_session_errors_pass_through() {
        let err = clear_session_if_invalid(Err(ApiError::Server {
            status: 500,
            message: "boom".into(),
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "API error (500): boom");
    }

    #[test]
    fn session_errors_mention_the_cleanup() {
        let err = session_cleared_error(&ApiError::Server {
            status: 401,
            message: "token expired".into(),
        });
        let message = err.to_string();
        assert!(message.contains("token expired"));
        assert!(message.contains("session cleared"));
        assert!(message.contains("tsys auth login"));
    }

    #[test]
    fn only_session_errors_are_classified_for_cleanup() {
        assert!(ApiError::NotAuthenticated.is_session_invalid());
        assert!(
            !ApiError::Server {
                status: 404,
                message: "missing".into()
            }
            .is_session_invalid()
        );
    }
}
