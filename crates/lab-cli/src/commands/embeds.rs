use lab_core::lifecycle::newest_first;
use lab_core::requests::ListEmbedsQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmbedCommands;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `labctl embeds`.
pub async fn handle(action: &EmbedCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EmbedCommands::List {
            lab,
            workshop,
            document,
        } => {
            let query = ListEmbedsQuery {
                lab_id: lab.clone(),
                workshop_id: workshop.clone(),
                workshop_document_id: document.clone(),
            };
            let embeds = newest_first(&ctx.client.list_embeds(&query).await?);
            output_rows(&embeds, flags.format)
        }
    }
}
