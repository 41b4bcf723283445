use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::effective_id;

/// Placement of a lab inside a workshop document, optionally pinned to a
/// specific version.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabEmbed {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub lab_id: Option<String>,
    pub workshop_id: Option<String>,
    pub workshop_document_id: Option<String>,
    pub block_id: Option<String>,
    pub block_type: Option<String>,
    pub pinned_version_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl LabEmbed {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        effective_id(self.mongo_id.as_deref(), self.id.as_deref())
    }
}
