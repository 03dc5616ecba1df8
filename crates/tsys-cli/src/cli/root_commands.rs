use clap::Subcommand;

use super::subcommands::{AdminCommands, AuthCommands, ProjectCommands, TicketCommands};

/// Root subcommand tree for `tsys`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Session and account management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Project CRUD.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Ticket CRUD within a project, plus your assigned tickets.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Admin-only operations (export, test-data generation).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
