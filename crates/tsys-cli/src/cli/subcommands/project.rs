use clap::{Args, Subcommand};

use tsys_core::ProjectStatus;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List all projects visible to the current user.
    List,
    /// Fetch one project by id.
    Get(ProjectIdArg),
    /// Create a project.
    Create(ProjectCreateArgs),
    /// Replace a project (full update).
    Update(ProjectUpdateArgs),
    /// Update only the given fields.
    Patch(ProjectPatchArgs),
    /// Delete a project.
    Delete(ProjectIdArg),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectIdArg {
    /// Project id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectUpdateArgs {
    /// Project id.
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// open, in_progress, or closed.
    #[arg(long)]
    pub status: ProjectStatus,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectPatchArgs {
    /// Project id.
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// open, in_progress, or closed.
    #[arg(long)]
    pub status: Option<ProjectStatus>,
}
