use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Labs { action } => commands::labs::handle(&action, ctx, flags).await,
        Commands::Versions { action } => commands::versions::handle(&action, ctx, flags).await,
        Commands::Draft { action } => commands::draft::handle(&action, ctx, flags).await,
        Commands::Embeds { action } => commands::embeds::handle(&action, ctx, flags).await,
    }
}
