mod draft;
mod embeds;
mod labs;
mod versions;

pub use draft::DraftCommands;
pub use embeds::EmbedCommands;
pub use labs::LabCommands;
pub use versions::VersionCommands;
