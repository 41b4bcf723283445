//! Version status model: display ordering and lab status transitions.
//!
//! Versions are shown newest first by creation timestamp. Timestamps are
//! kept as the raw strings the service sent; anything missing or unparseable
//! sorts as the epoch so it lands after every dated row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::entities::{Lab, LabEmbed, LabVersion};
use crate::enums::LabStatus;
use crate::errors::CoreError;

/// Rows that carry a creation timestamp.
pub trait Timestamped {
    fn created_at(&self) -> Option<&str>;
}

impl Timestamped for Lab {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for LabVersion {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for LabEmbed {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Milliseconds since the epoch, or `0` when absent or unparseable.
/// Instants before the epoch also clamp to `0`.
///
/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC),
/// and a bare `YYYY-MM-DD`.
#[must_use]
pub fn timestamp_millis(raw: Option<&str>) -> i64 {
    parse_millis(raw).max(0)
}

fn parse_millis(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.timestamp_millis();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.and_utc().timestamp_millis();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp_millis())
}

/// Sort rows in place, newest first. Ties keep their relative order.
pub fn sort_newest_first<T: Timestamped>(rows: &mut [T]) {
    rows.sort_by_cached_key(|row| std::cmp::Reverse(timestamp_millis(row.created_at())));
}

/// Return a newest-first copy of `rows`.
#[must_use]
pub fn newest_first<T: Timestamped + Clone>(rows: &[T]) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sort_newest_first(&mut sorted);
    sorted
}

/// The published version to display for a lab.
///
/// Prefers the pinned `latestPublishedVersionId`; otherwise the newest
/// version that is not a draft.
#[must_use]
pub fn current_published<'a>(lab: &Lab, versions: &'a [LabVersion]) -> Option<&'a LabVersion> {
    if let Some(pinned) = lab.latest_published_version_id.as_deref()
        && let Some(found) = versions
            .iter()
            .find(|v| !v.is_draft && v.entity_id() == pinned)
    {
        return Some(found);
    }

    versions
        .iter()
        .filter(|v| !v.is_draft)
        .max_by_key(|v| timestamp_millis(v.created_at()))
}

/// Number of versions flagged as drafts. More than one breaks the
/// single-draft invariant.
#[must_use]
pub fn draft_count(versions: &[LabVersion]) -> usize {
    versions.iter().filter(|v| v.is_draft).count()
}

/// Record a successful publish of `version_id` on the local copy of `lab`.
///
/// The first publish moves the lab to `published`; later publishes keep it
/// there and move the latest-published pointer.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when the lab is archived.
pub fn apply_publish(lab: &mut Lab, version_id: &str) -> Result<(), CoreError> {
    let from = lab.status();
    if !from.can_transition_to(LabStatus::Published) {
        return Err(CoreError::InvalidTransition {
            id: lab.entity_id().to_string(),
            from,
            to: LabStatus::Published,
        });
    }

    lab.status = Some(LabStatus::Published);
    lab.latest_published_version_id = Some(version_id.to_string());
    if lab.current_draft_version_id.as_deref() == Some(version_id) {
        lab.current_draft_version_id = None;
    }
    Ok(())
}

/// Record an archive on the local copy of `lab`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when the lab is already archived.
pub fn apply_archive(lab: &mut Lab) -> Result<(), CoreError> {
    let from = lab.status();
    if !from.can_transition_to(LabStatus::Archived) {
        return Err(CoreError::InvalidTransition {
            id: lab.entity_id().to_string(),
            from,
            to: LabStatus::Archived,
        });
    }
    lab.status = Some(LabStatus::Archived);
    Ok(())
}
