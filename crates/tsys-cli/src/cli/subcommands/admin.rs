use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Admin-only commands. The backend enforces the admin role; these fail with
/// a 403 for everyone else.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Download the full-database JSON export.
    Export(AdminExportArgs),
    /// Ask the backend to generate test data.
    Generate(AdminGenerateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AdminExportArgs {
    /// Where to write the export. Defaults to the server-suggested filename
    /// in the current directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AdminGenerateArgs {
    /// Number of users to generate.
    #[arg(long)]
    pub users: u32,
    /// Number of projects to generate.
    #[arg(long)]
    pub projects: u32,
    /// Tickets to create per generated user.
    #[arg(long)]
    pub tickets_per_user: u32,
}
