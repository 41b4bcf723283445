use std::path::PathBuf;

use clap::Subcommand;

/// Draft commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DraftCommands {
    /// Create a draft unless the lab already has one.
    New { lab: String },
    /// Print the lab's draft as an editable buffer file.
    Show { lab: String },
    /// Run the publish checks against a buffer file without contacting the service.
    Check {
        #[arg(long)]
        file: PathBuf,
    },
    /// Save a buffer file into the lab's draft.
    Save {
        lab: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Check, save and publish a buffer file.
    Publish {
        lab: String,
        #[arg(long)]
        file: PathBuf,
    },
}
