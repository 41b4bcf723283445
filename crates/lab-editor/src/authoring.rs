//! Lab-level authoring workflows: create, new draft, overview, publish from
//! the version list, and archive.

use lab_client::LabsBackend;
use lab_core::entities::{Lab, LabVersion};
use lab_core::enums::LabLanguage;
use lab_core::lifecycle::{current_published, newest_first};
use lab_core::requests::{CreateLabDto, DraftVersionPayload, PublishVersionDto};

use crate::error::EditorError;
use crate::resolver::resolve_draft;

/// A lab with its versions arranged for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LabOverview {
    pub lab: Lab,
    /// All versions, newest first.
    pub versions: Vec<LabVersion>,
    pub draft: Option<LabVersion>,
    pub current_published: Option<LabVersion>,
}

/// Outcome of asking for a new draft.
#[derive(Debug, Clone, PartialEq)]
pub enum NewDraft {
    Created(LabVersion),
    /// The lab already had a draft; no second one was created.
    Existing(LabVersion),
}

impl NewDraft {
    #[must_use]
    pub const fn version(&self) -> &LabVersion {
        match self {
            Self::Created(version) | Self::Existing(version) => version,
        }
    }

    #[must_use]
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Create a lab and immediately give it an empty `typescript` draft.
///
/// # Errors
///
/// Returns [`EditorError::Client`] if either request fails. A failed draft
/// creation leaves the lab in place.
pub async fn create_lab_with_draft(
    backend: &dyn LabsBackend,
    dto: &CreateLabDto,
) -> Result<Lab, EditorError> {
    let lab = backend.create_lab(dto).await?;
    let lab_id = lab.entity_id();
    if lab_id.is_empty() {
        return Err(EditorError::Missing("identifier of the created lab".into()));
    }

    let payload =
        DraftVersionPayload::bare(dto.created_by.as_str()).with_language(LabLanguage::Typescript);
    let draft = backend.create_draft_version(lab_id, &payload).await?;
    tracing::info!(lab_id, version_id = draft.entity_id(), "lab created with draft");
    Ok(lab)
}

/// Load a lab and arrange its versions for display.
///
/// # Errors
///
/// Returns [`EditorError::Client`] if either request fails.
pub async fn overview(backend: &dyn LabsBackend, lab_id: &str) -> Result<LabOverview, EditorError> {
    let (lab, versions) =
        tokio::try_join!(backend.get_lab(lab_id), backend.list_versions(lab_id))?;

    let draft = resolve_draft(&lab, &versions).cloned();
    let current_published = current_published(&lab, &versions).cloned();
    Ok(LabOverview {
        versions: newest_first(&versions),
        lab,
        draft,
        current_published,
    })
}

/// Create a draft for `lab_id` unless one already exists.
///
/// # Errors
///
/// Returns [`EditorError::Archived`] for archived labs and
/// [`EditorError::Client`] when a request fails.
pub async fn create_new_draft(
    backend: &dyn LabsBackend,
    lab_id: &str,
    actor_id: &str,
) -> Result<NewDraft, EditorError> {
    let (lab, versions) =
        tokio::try_join!(backend.get_lab(lab_id), backend.list_versions(lab_id))?;

    if let Some(existing) = resolve_draft(&lab, &versions) {
        tracing::info!(
            lab_id,
            version_id = existing.entity_id(),
            "lab already has a draft"
        );
        return Ok(NewDraft::Existing(existing.clone()));
    }
    if lab.is_archived() {
        return Err(EditorError::Archived {
            lab_id: lab_id.to_string(),
        });
    }

    let created = backend
        .create_draft_version(lab_id, &DraftVersionPayload::bare(actor_id))
        .await?;
    Ok(NewDraft::Created(created))
}

/// Publish `version_id` and return the reloaded versions, newest first.
///
/// # Errors
///
/// Returns [`EditorError::Client`] if publishing or reloading fails.
pub async fn publish_version_and_reload(
    backend: &dyn LabsBackend,
    lab_id: &str,
    version_id: &str,
    actor_id: &str,
) -> Result<Vec<LabVersion>, EditorError> {
    let dto = PublishVersionDto {
        published_by: actor_id.to_string(),
    };
    backend.publish_version(lab_id, version_id, &dto).await?;
    tracing::info!(lab_id, version_id, "version published");

    let versions = backend.list_versions(lab_id).await?;
    Ok(newest_first(&versions))
}

/// Archive a lab. A blank or absent `archived_by` falls back to `default_actor`.
///
/// # Errors
///
/// Returns [`EditorError::Missing`] when no actor can be determined and
/// [`EditorError::Client`] when the request fails.
pub async fn archive(
    backend: &dyn LabsBackend,
    lab_id: &str,
    archived_by: Option<&str>,
    default_actor: &str,
) -> Result<(), EditorError> {
    let actor = archived_by
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| default_actor.trim());
    if actor.is_empty() {
        return Err(EditorError::Missing("actor to attribute the archive to".into()));
    }

    backend.archive_lab(lab_id, actor).await?;
    tracing::info!(lab_id, archived_by = actor, "lab archived");
    Ok(())
}
