//! Request payloads and list filters sent to the persistence service.
//!
//! Optional fields are skipped when absent so partial updates never clobber
//! stored values with `null`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ReferenceSolution, RunnerConfig, TestCase};
use crate::enums::{LabDifficulty, LabLanguage, LabStatus};

/// Body of `POST /labs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabDto {
    pub workshop_id: String,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub difficulty: LabDifficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    pub created_by: String,
}

/// Body of `PATCH /labs/{id}`. Build with [`LabUpdateBuilder`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<LabDifficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl LabUpdate {
    /// True when no field would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.summary.is_none()
            && self.tags.is_none()
            && self.difficulty.is_none()
            && self.estimated_minutes.is_none()
    }
}

pub struct LabUpdateBuilder(LabUpdate);

impl Default for LabUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LabUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LabUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.0.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.0.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: LabDifficulty) -> Self {
        self.0.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn estimated_minutes(mut self, minutes: u32) -> Self {
        self.0.estimated_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn updated_by(mut self, actor: impl Into<String>) -> Self {
        self.0.updated_by = Some(actor.into());
        self
    }

    #[must_use]
    pub fn build(self) -> LabUpdate {
        self.0
    }
}

/// Body of `POST /labs/{id}/versions/draft` and `PATCH /labs/{id}/versions/{vid}`.
///
/// Creating a bare draft sends only `createdBy`; saving an edit buffer sends
/// every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftVersionPayload {
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LabLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_tests: Option<Vec<TestCase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_tests: Option<Vec<TestCase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<RunnerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_solution: Option<ReferenceSolution>,
}

impl DraftVersionPayload {
    /// A payload that only names the actor creating an empty draft.
    #[must_use]
    pub fn bare(created_by: impl Into<String>) -> Self {
        Self {
            created_by: created_by.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: LabLanguage) -> Self {
        self.language = Some(language);
        self
    }
}

/// Body of `POST /labs/{id}/versions/{vid}/publish`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishVersionDto {
    pub published_by: String,
}

/// Filters for `GET /labs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLabsQuery {
    pub workshop_id: Option<String>,
    pub status: Option<LabStatus>,
    pub tag: Option<String>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ListLabsQuery {
    /// Query parameters in wire spelling; blank filtering is the caller's job.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("workshopId", self.workshop_id.clone()),
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("tag", self.tag.clone()),
            ("q", self.q.clone()),
            ("limit", self.limit.map(|n| n.to_string())),
            ("skip", self.skip.map(|n| n.to_string())),
        ]
    }
}

/// Filters for `GET /embeds`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEmbedsQuery {
    pub lab_id: Option<String>,
    pub workshop_id: Option<String>,
    pub workshop_document_id: Option<String>,
}

impl ListEmbedsQuery {
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("labId", self.lab_id.clone()),
            ("workshopId", self.workshop_id.clone()),
            ("workshopDocumentId", self.workshop_document_id.clone()),
        ]
    }
}
