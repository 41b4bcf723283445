use clap::Subcommand;

/// Embed commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmbedCommands {
    /// List embeds.
    List {
        #[arg(long)]
        lab: Option<String>,
        #[arg(long)]
        workshop: Option<String>,
        /// Workshop document ID.
        #[arg(long)]
        document: Option<String>,
    },
}
