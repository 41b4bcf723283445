use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::de::strings_lenient;
use crate::entities::effective_id;
use crate::enums::{LabDifficulty, LabStatus};

/// An exercise shell. Owns its versions by foreign key and is archived
/// rather than deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub workshop_id: Option<String>,
    pub workshop_document_group_id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "strings_lenient")]
    pub tags: Vec<String>,
    pub difficulty: Option<LabDifficulty>,
    pub estimated_minutes: Option<u32>,
    pub status: Option<LabStatus>,
    pub current_draft_version_id: Option<String>,
    pub latest_published_version_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Lab {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        effective_id(self.mongo_id.as_deref(), self.id.as_deref())
    }

    /// Lifecycle status, treating a missing status as `draft`.
    #[must_use]
    pub fn status(&self) -> LabStatus {
        self.status.unwrap_or_default()
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status().is_terminal()
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_document() {
        let lab: Lab = serde_json::from_str(
            r#"{
                "_id": "lab-1",
                "workshopId": "ws-9",
                "slug": "two-sum",
                "title": "Two Sum",
                "tags": ["arrays", 7, "hashing"],
                "difficulty": "easy",
                "estimatedMinutes": 15,
                "status": "published",
                "currentDraftVersionId": "ver-3",
                "latestPublishedVersionId": "ver-2"
            }"#,
        )
        .unwrap();

        assert_eq!(lab.entity_id(), "lab-1");
        assert_eq!(lab.tags, vec!["arrays", "hashing"]);
        assert_eq!(lab.difficulty, Some(LabDifficulty::Easy));
        assert_eq!(lab.status(), LabStatus::Published);
        assert_eq!(lab.current_draft_version_id.as_deref(), Some("ver-3"));
    }

    #[test]
    fn missing_status_is_draft() {
        let lab: Lab = serde_json::from_str(r#"{"id": "lab-2"}"#).unwrap();
        assert_eq!(lab.status(), LabStatus::Draft);
        assert!(!lab.is_archived());
        assert_eq!(lab.display_title(), "(untitled)");
    }
}
