//! `tsys project <subcommand>` handlers.

use serde::Serialize;

use tsys_config::TsysConfig;
use tsys_core::project::{ProjectCreateRequest, ProjectPatchRequest, ProjectUpdateRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::api_client;
use crate::output::output;

pub async fn handle(
    action: &ProjectCommands,
    flags: &GlobalFlags,
    config: &TsysConfig,
) -> anyhow::Result<()> {
    let client = api_client(config);
    match action {
        ProjectCommands::List => {
            let projects = client.list_projects().await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Get(args) => {
            let project = client.get_project(&args.id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Create(args) => {
            let req = ProjectCreateRequest {
                name: args.name.clone(),
                description: args.description.clone(),
            };
            let project = client.create_project(&req).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Update(args) => {
            let req = ProjectUpdateRequest {
                name: args.name.clone(),
                description: args.description.clone(),
                status: args.status.to_string(),
            };
            let project = client.update_project(&args.id, &req).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Patch(args) => {
            let req = ProjectPatchRequest {
                name: args.name.clone(),
                description: args.description.clone(),
                status: args.status.map(|s| s.to_string()),
            };
            let project = client.patch_project(&args.id, &req).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Delete(args) => {
            client.delete_project(&args.id).await?;
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
