//! Acting author identity.

use serde::{Deserialize, Serialize};

/// The externally resolved identity written into `createdBy`,
/// `publishedBy` and `archivedBy`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ActorConfig {
    #[serde(default)]
    pub id: String,
}

impl ActorConfig {
    pub fn is_configured(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
