//! One editing session over a lab's draft.
//!
//! Opening a session loads the lab and its versions, resolves (or creates)
//! the draft and hydrates an [`EditBuffer`]. Saves and publishes go through
//! [`DraftPersistence`]. Progress is exposed as flags and as synchronous
//! events delivered to registered listeners in the order things happen.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lab_client::LabsBackend;
use lab_core::entities::{Lab, LabVersion};
use lab_core::lifecycle::{apply_publish, newest_first};
use lab_core::requests::DraftVersionPayload;

use crate::buffer::{EditBuffer, EditorDefaults};
use crate::error::{EditorError, Operation};
use crate::gate::validate_for_publish;
use crate::orchestrator::{DraftPersistence, PublishedDraft, SavedDraft};
use crate::resolver::resolve_draft;

/// Shown when the save-then-publish sequence fails remotely.
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to publish draft.";

/// Something observable happened in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SavingChanged(bool),
    PublishingChanged(bool),
    Saved { version_id: String },
    SaveFailed { message: String },
    Published { version_id: String },
    PublishFailed { message: String },
    ActiveVersionChanged { from: Option<String>, to: Option<String> },
}

type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// Read-only view of the in-flight flags. Clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionFlags {
    saving: Arc<AtomicBool>,
    publishing: Arc<AtomicBool>,
}

impl SessionFlags {
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_publishing(&self) -> bool {
        self.publishing.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.is_saving() || self.is_publishing()
    }

    fn begin(&self, operation: Operation) -> Result<FlagGuard, EditorError> {
        if self.is_busy() {
            return Err(EditorError::Busy(operation));
        }
        let flag = match operation {
            Operation::Save => &self.saving,
            Operation::Publish => &self.publishing,
        };
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| EditorError::Busy(operation))?;
        Ok(FlagGuard(Arc::clone(flag)))
    }
}

/// Clears its flag when dropped, including when the owning future is
/// dropped mid-flight.
struct FlagGuard(Arc<AtomicBool>);

impl Drop for FlagGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct EditorSession {
    actor_id: String,
    lab: Lab,
    versions: Vec<LabVersion>,
    persistence: DraftPersistence,
    buffer: EditBuffer,
    flags: SessionFlags,
    publish_error: Option<String>,
    listeners: Vec<Listener>,
}

impl EditorSession {
    /// Load `lab_id` and open its draft for editing.
    ///
    /// Lab and versions are fetched concurrently. When no draft can be
    /// resolved a bare one is created (attributed to `actor_id`) and then
    /// fetched by id.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Client`] when any request fails and
    /// [`EditorError::Archived`] when a draft would have to be created on an
    /// archived lab.
    pub async fn open(
        backend: Arc<dyn LabsBackend>,
        lab_id: &str,
        actor_id: &str,
        defaults: &EditorDefaults,
    ) -> Result<Self, EditorError> {
        let (lab, mut versions) =
            tokio::try_join!(backend.get_lab(lab_id), backend.list_versions(lab_id))?;

        let resolved = resolve_draft(&lab, &versions).map(|v| v.entity_id().to_string());
        let draft = match resolved {
            Some(version_id) => backend.get_version(lab_id, &version_id).await?,
            None => {
                if lab.is_archived() {
                    return Err(EditorError::Archived {
                        lab_id: lab_id.to_string(),
                    });
                }
                tracing::info!(lab_id, "no draft found, creating one");
                let created = backend
                    .create_draft_version(lab_id, &DraftVersionPayload::bare(actor_id))
                    .await?;
                let created_id = created.entity_id();
                if created_id.is_empty() {
                    return Err(EditorError::Missing(format!(
                        "identifier of the draft created for lab {lab_id}"
                    )));
                }
                let fetched = backend.get_version(lab_id, created_id).await?;
                versions.push(created);
                fetched
            }
        };

        let draft_id = draft.entity_id().to_string();
        tracing::debug!(lab_id, version_id = %draft_id, "editor session opened");

        Ok(Self {
            persistence: DraftPersistence::new(backend, lab_id, Some(draft_id)),
            buffer: EditBuffer::from_version(&draft, defaults),
            actor_id: actor_id.to_string(),
            lab,
            versions,
            flags: SessionFlags::default(),
            publish_error: None,
            listeners: Vec::new(),
        })
    }

    // ---------------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------------

    #[must_use]
    pub const fn lab(&self) -> &Lab {
        &self.lab
    }

    /// Known versions, newest first.
    #[must_use]
    pub fn versions(&self) -> Vec<LabVersion> {
        newest_first(&self.versions)
    }

    #[must_use]
    pub const fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Edits made here are kept across failed saves.
    pub const fn buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.buffer
    }

    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        self.flags.clone()
    }

    #[must_use]
    pub fn publish_error(&self) -> Option<&str> {
        self.publish_error.as_deref()
    }

    #[must_use]
    pub fn active_version_id(&self) -> Option<&str> {
        self.persistence.active_version_id()
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.lab.is_archived()
    }

    /// Register a listener. Listeners run synchronously, in registration order.
    pub fn on_event(&mut self, listener: impl FnMut(&SessionEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ---------------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------------

    /// Persist the buffer into the active draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Archived`] or [`EditorError::Busy`] without
    /// contacting the service, and [`EditorError::Client`] when the save
    /// fails. The buffer is untouched either way.
    pub async fn save(&mut self) -> Result<SavedDraft, EditorError> {
        self.ensure_writable()?;
        let guard = self.flags.begin(Operation::Save)?;
        self.publish_error = None;
        self.emit(&SessionEvent::SavingChanged(true));

        let before = self.active_version_id().map(String::from);
        let payload = self.buffer.to_payload(&self.actor_id);
        let result = self.persistence.save_draft(&payload).await;

        drop(guard);
        self.emit(&SessionEvent::SavingChanged(false));

        match result {
            Ok(saved) => {
                self.upsert_version(saved.version.clone());
                self.sync_active_version(before);
                self.emit(&SessionEvent::Saved {
                    version_id: saved.version_id().to_string(),
                });
                Ok(saved)
            }
            Err(error) => {
                tracing::warn!(lab_id = %self.lab_id(), %error, "draft save failed");
                self.emit(&SessionEvent::SaveFailed {
                    message: error.to_string(),
                });
                Err(error.into())
            }
        }
    }

    /// Validate, save, then publish the draft.
    ///
    /// A gate violation is stored as the publish error and nothing is sent.
    /// A remote failure stores [`PUBLISH_FAILED_MESSAGE`]; if the save half
    /// succeeded the draft stays saved.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] for gate violations and otherwise
    /// the same errors as [`Self::save`].
    pub async fn publish(&mut self) -> Result<PublishedDraft, EditorError> {
        self.ensure_writable()?;
        if self.flags.is_busy() {
            return Err(EditorError::Busy(Operation::Publish));
        }

        if let Some(violation) = validate_for_publish(&self.buffer) {
            let message = violation.to_string();
            self.publish_error = Some(message.clone());
            self.emit(&SessionEvent::PublishFailed { message });
            return Err(EditorError::Validation(violation));
        }

        let guard = self.flags.begin(Operation::Publish)?;
        self.publish_error = None;
        self.emit(&SessionEvent::PublishingChanged(true));

        let before = self.active_version_id().map(String::from);
        let payload = self.buffer.to_payload(&self.actor_id);
        let actor = self.actor_id.clone();
        let result = self.persistence.publish(&payload, &actor).await;

        drop(guard);
        self.emit(&SessionEvent::PublishingChanged(false));

        match result {
            Ok(outcome) => {
                let version_id = outcome.published.entity_id().to_string();
                self.upsert_version(outcome.saved.version.clone());
                self.upsert_version(outcome.published.clone());
                if let Err(error) = apply_publish(&mut self.lab, &version_id) {
                    tracing::warn!(%error, "local lab status not updated after publish");
                }
                self.sync_active_version(before);
                self.emit(&SessionEvent::Published { version_id });
                Ok(outcome)
            }
            Err(error) => {
                tracing::warn!(lab_id = %self.lab_id(), %error, "publish failed");
                self.sync_active_version(before);
                self.publish_error = Some(PUBLISH_FAILED_MESSAGE.to_string());
                self.emit(&SessionEvent::PublishFailed {
                    message: PUBLISH_FAILED_MESSAGE.to_string(),
                });
                Err(error)
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------------

    fn lab_id(&self) -> &str {
        self.persistence.lab_id()
    }

    fn ensure_writable(&self) -> Result<(), EditorError> {
        if self.lab.is_archived() {
            return Err(EditorError::Archived {
                lab_id: self.lab_id().to_string(),
            });
        }
        Ok(())
    }

    fn emit(&mut self, event: &SessionEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    fn upsert_version(&mut self, version: LabVersion) {
        let id = version.entity_id().to_string();
        let position = self
            .versions
            .iter()
            .position(|v| !id.is_empty() && v.entity_id() == id);
        match position {
            Some(index) => self.versions[index] = version,
            None => self.versions.push(version),
        }
    }

    /// Emit a change event and repoint the local lab when the active draft moved.
    fn sync_active_version(&mut self, before: Option<String>) {
        let after = self.active_version_id().map(String::from);
        if after == before {
            return;
        }
        if after.is_some() {
            self.lab.current_draft_version_id.clone_from(&after);
        }
        self.emit(&SessionEvent::ActiveVersionChanged {
            from: before,
            to: after,
        });
    }
}
