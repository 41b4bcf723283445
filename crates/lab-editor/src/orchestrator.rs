//! Update-or-create persistence of a draft, and the save-then-publish sequence.
//!
//! A draft id can go stale between loads (the row was deleted, published by
//! someone else, or never existed). Only [`ClientError::MissingTarget`]
//! triggers recreation; every other failure is returned untouched and is
//! never retried.

use std::sync::Arc;

use lab_client::{ClientError, LabsBackend};
use lab_core::entities::LabVersion;
use lab_core::requests::{DraftVersionPayload, PublishVersionDto};

use crate::error::EditorError;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDraft {
    pub version: LabVersion,
    /// A new draft was created rather than an existing one updated.
    pub created: bool,
}

impl SavedDraft {
    #[must_use]
    pub fn version_id(&self) -> &str {
        self.version.entity_id()
    }
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedDraft {
    pub saved: SavedDraft,
    pub published: LabVersion,
}

/// Save `payload` into the draft `version_id` of `lab_id`.
///
/// With no `version_id` the draft is created directly. When the update
/// target is missing (404/405) the same payload is used to create a draft.
///
/// # Errors
///
/// Returns the update's [`ClientError`] unless it is a missing target, or the
/// create's error when recreation fails.
pub async fn save_draft(
    backend: &dyn LabsBackend,
    lab_id: &str,
    version_id: Option<&str>,
    payload: &DraftVersionPayload,
) -> Result<SavedDraft, ClientError> {
    let Some(version_id) = version_id.filter(|id| !id.is_empty()) else {
        tracing::debug!(lab_id, "no active draft, creating one");
        let version = backend.create_draft_version(lab_id, payload).await?;
        return Ok(SavedDraft {
            version,
            created: true,
        });
    };

    tracing::debug!(lab_id, version_id, "updating draft");
    match backend.update_draft_version(lab_id, version_id, payload).await {
        Ok(version) => Ok(SavedDraft {
            version,
            created: false,
        }),
        Err(error) if error.is_missing_target() => {
            tracing::warn!(lab_id, version_id, %error, "draft missing, creating a new one");
            let version = backend.create_draft_version(lab_id, payload).await?;
            Ok(SavedDraft {
                version,
                created: true,
            })
        }
        Err(error) => Err(error),
    }
}

/// Tracks the active draft of one lab across saves and publishes.
pub struct DraftPersistence {
    backend: Arc<dyn LabsBackend>,
    lab_id: String,
    active_version_id: Option<String>,
}

impl DraftPersistence {
    pub fn new(
        backend: Arc<dyn LabsBackend>,
        lab_id: impl Into<String>,
        active_version_id: Option<String>,
    ) -> Self {
        Self {
            backend,
            lab_id: lab_id.into(),
            active_version_id: active_version_id.filter(|id| !id.is_empty()),
        }
    }

    #[must_use]
    pub fn lab_id(&self) -> &str {
        &self.lab_id
    }

    /// The draft the next save will update, if any.
    #[must_use]
    pub fn active_version_id(&self) -> Option<&str> {
        self.active_version_id.as_deref()
    }

    /// Save the payload, adopting the id of a recreated draft.
    ///
    /// # Errors
    ///
    /// See [`save_draft`]. The active id is left unchanged on failure.
    pub async fn save_draft(
        &mut self,
        payload: &DraftVersionPayload,
    ) -> Result<SavedDraft, ClientError> {
        let saved = save_draft(
            self.backend.as_ref(),
            &self.lab_id,
            self.active_version_id.as_deref(),
            payload,
        )
        .await?;

        let saved_id = saved.version_id();
        if !saved_id.is_empty() && self.active_version_id.as_deref() != Some(saved_id) {
            tracing::debug!(
                lab_id = %self.lab_id,
                from = ?self.active_version_id,
                to = saved_id,
                "active draft changed"
            );
            self.active_version_id = Some(saved_id.to_string());
        }
        Ok(saved)
    }

    /// Save, then publish the saved version as `published_by`.
    ///
    /// Publish is only attempted after a successful save. A failed publish
    /// leaves the saved draft in place and active.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Client`] from whichever step failed.
    pub async fn publish(
        &mut self,
        payload: &DraftVersionPayload,
        published_by: &str,
    ) -> Result<PublishedDraft, EditorError> {
        let saved = self.save_draft(payload).await?;
        let version_id = saved.version_id().to_string();

        let dto = PublishVersionDto {
            published_by: published_by.to_string(),
        };
        let published = self
            .backend
            .publish_version(&self.lab_id, &version_id, &dto)
            .await?;

        tracing::info!(lab_id = %self.lab_id, version_id = %version_id, "draft published");
        // Published versions are immutable; the next save starts a new draft.
        self.active_version_id = None;

        Ok(PublishedDraft { saved, published })
    }
}
