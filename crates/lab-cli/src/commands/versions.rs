use lab_core::lifecycle::newest_first;
use lab_editor::{VersionView, authoring};

use crate::cli::subcommands::VersionCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows, render_rows};

/// Handle `labctl versions`.
pub async fn handle(
    action: &VersionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VersionCommands::List { lab } => {
            let versions = newest_first(&ctx.client.list_versions(lab).await?);
            output_rows(&versions, flags.format)
        }
        VersionCommands::Get { lab, version } => {
            let version = ctx.client.get_version(lab, version).await?;
            if flags.format != OutputFormat::Table {
                return output(&version, flags.format);
            }

            let view = VersionView::from_version(&version);
            let summary = render_rows(std::slice::from_ref(&version), flags.format)?;
            println!("{summary}\n\nTests:\n{}\n\nRunner:\n{}", view.tests_json, view.runner_json);
            Ok(())
        }
        VersionCommands::Publish { lab, version } => {
            let versions = authoring::publish_version_and_reload(
                ctx.backend().as_ref(),
                lab,
                version,
                ctx.actor(),
            )
            .await?;
            output_rows(&versions, flags.format)
        }
    }
}
