use clap::{Args, Subcommand};

use tsys_core::{TicketKind, TicketPriority, TicketState};

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// List all tickets in a project.
    List(TicketListArgs),
    /// List tickets assigned to the current user (no project scope).
    Mine,
    /// Fetch one ticket.
    Get(TicketIdArgs),
    /// Create a ticket in a project.
    Create(TicketWriteArgs),
    /// Replace a ticket (full update).
    Update(TicketUpdateArgs),
    /// Update only the given fields.
    Patch(TicketUpdateArgs),
    /// Delete a ticket.
    Delete(TicketIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TicketListArgs {
    /// Project id.
    #[arg(long)]
    pub project: String,
}

#[derive(Clone, Debug, Args)]
pub struct TicketIdArgs {
    /// Project id.
    #[arg(long)]
    pub project: String,
    /// Ticket id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct TicketWriteArgs {
    /// Project id.
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// bug, task, or feature.
    #[arg(long)]
    pub kind: Option<TicketKind>,
    /// low, med, or high.
    #[arg(long)]
    pub priority: Option<TicketPriority>,
    /// open, in_progress, or closed.
    #[arg(long)]
    pub state: Option<TicketState>,
    /// User id to assign the ticket to.
    #[arg(long)]
    pub assignee: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TicketUpdateArgs {
    /// Project id.
    #[arg(long)]
    pub project: String,
    /// Ticket id.
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// bug, task, or feature.
    #[arg(long)]
    pub kind: Option<TicketKind>,
    /// low, med, or high.
    #[arg(long)]
    pub priority: Option<TicketPriority>,
    /// open, in_progress, or closed.
    #[arg(long)]
    pub state: Option<TicketState>,
    /// User id to assign the ticket to.
    #[arg(long)]
    pub assignee: Option<String>,
}
