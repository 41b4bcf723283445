use clap::Subcommand;

/// Version commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VersionCommands {
    /// List a lab's versions, newest first.
    List { lab: String },
    /// Show one version with its tests and runner settings.
    Get { lab: String, version: String },
    /// Publish a draft version.
    Publish { lab: String, version: String },
}
