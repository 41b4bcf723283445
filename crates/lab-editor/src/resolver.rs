//! Locate the version that represents a lab's editable draft.

use lab_core::entities::{Lab, LabVersion};
use lab_core::lifecycle::draft_count;

/// Select the current draft of `lab` from `versions`.
///
/// The pinned `currentDraftVersionId` wins when it names a version in the
/// list, whatever that version's flags. Otherwise the first version flagged
/// `isDraft` is returned. `None` means the caller has to create a draft.
#[must_use]
pub fn resolve_draft<'a>(lab: &Lab, versions: &'a [LabVersion]) -> Option<&'a LabVersion> {
    if let Some(pinned) = lab.current_draft_version_id.as_deref().filter(|id| !id.is_empty())
        && let Some(found) = versions.iter().find(|v| v.entity_id() == pinned)
    {
        return Some(found);
    }

    let drafts = draft_count(versions);
    if drafts > 1 {
        tracing::warn!(
            lab_id = lab.entity_id(),
            drafts,
            "multiple versions flagged as draft, using the first"
        );
    }

    versions.iter().find(|v| v.is_draft)
}
