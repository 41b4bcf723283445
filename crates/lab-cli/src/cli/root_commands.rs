use clap::Subcommand;

use crate::cli::subcommands::{DraftCommands, EmbedCommands, LabCommands, VersionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Lab catalog and lifecycle.
    Labs {
        #[command(subcommand)]
        action: LabCommands,
    },
    /// Versions of a lab.
    Versions {
        #[command(subcommand)]
        action: VersionCommands,
    },
    /// Edit, check, save and publish a lab's draft.
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },
    /// Lab embeds in workshop documents.
    Embeds {
        #[command(subcommand)]
        action: EmbedCommands,
    },
}
