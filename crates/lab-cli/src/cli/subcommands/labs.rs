use clap::Subcommand;

/// Lab commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LabCommands {
    /// List labs in the catalog.
    List {
        #[arg(long)]
        workshop: Option<String>,
        /// draft, published or archived
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Free-text search.
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        skip: Option<u32>,
    },
    /// Get a lab by ID.
    Get { lab: String },
    /// Show a lab with its draft, current published version and history.
    Overview { lab: String },
    /// Create a lab together with an empty draft.
    Create {
        #[arg(long)]
        workshop: String,
        #[arg(long)]
        title: String,
        /// Derived from the title when omitted.
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        tag: Vec<String>,
        /// intro, easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Update lab metadata.
    Update {
        lab: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        minutes: Option<u32>,
        /// Replaces the tag list when given.
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Archive a lab.
    Archive {
        lab: String,
        /// Defaults to the configured actor.
        #[arg(long)]
        by: Option<String>,
    },
}
