//! `tsys admin <subcommand>` handlers.

use std::path::PathBuf;

use serde::Serialize;

use tsys_config::TsysConfig;
use tsys_core::admin::GenerateDataRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::api_client;
use crate::output::output;

pub async fn handle(
    action: &AdminCommands,
    flags: &GlobalFlags,
    config: &TsysConfig,
) -> anyhow::Result<()> {
    let client = api_client(config);
    match action {
        AdminCommands::Export(args) => {
            let export = client.export_json().await?;
            let path = args
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(&export.filename));
            std::fs::write(&path, &export.bytes)?;
            output(
                &ExportResponse {
                    path: path.display().to_string(),
                    bytes: export.bytes.len(),
                },
                flags.format,
            )
        }
        AdminCommands::Generate(args) => {
            let req = GenerateDataRequest {
                user_count: args.users,
                project_count: args.projects,
                tickets_per_user: args.tickets_per_user,
            };
            client.generate_data(&req).await?;
            output(
                &GenerateResponse {
                    generated: true,
                    user_count: args.users,
                    project_count: args.projects,
                    tickets_per_user: args.tickets_per_user,
                },
                flags.format,
            )
        }
    }
}

#[derive(Serialize)]
struct ExportResponse {
    path: String,
    bytes: usize,
}

#[derive(Serialize)]
struct GenerateResponse {
    generated: bool,
    user_count: u32,
    project_count: u32,
    tickets_per_user: u32,
}
