//! In-memory labs service for editor tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use lab_client::{ClientError, LabsBackend};
use lab_core::entities::{Lab, LabVersion};
use lab_core::enums::LabStatus;
use lab_core::requests::{CreateLabDto, DraftVersionPayload, PublishVersionDto};

pub const LAB_ID: &str = "lab-1";
pub const ACTOR: &str = "author-1";

/// A request the fake received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetLab(String),
    CreateLab(CreateLabDto),
    ArchiveLab { lab_id: String, archived_by: String },
    ListVersions(String),
    GetVersion(String),
    CreateDraft(DraftVersionPayload),
    UpdateDraft { version_id: String, payload: DraftVersionPayload },
    Publish { version_id: String, published_by: String },
}

/// How a scripted request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// 404, the shape of a stale draft id.
    Missing,
    /// 500 from the service.
    Server,
}

impl Failure {
    fn to_error(self) -> ClientError {
        match self {
            Self::Missing => ClientError::MissingTarget { status: 404 },
            Self::Server => ClientError::Api {
                status: 500,
                message: "boom".into(),
            },
        }
    }
}

#[derive(Default)]
struct State {
    lab: Lab,
    versions: Vec<LabVersion>,
    calls: Vec<Call>,
    next_id: u32,
    fail_update: Option<Failure>,
    fail_create: Option<Failure>,
    fail_publish: Option<Failure>,
    hang_update: bool,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new(lab: Lab, versions: Vec<LabVersion>) -> Self {
        let fake = Self::default();
        {
            let mut state = fake.lock();
            state.next_id = u32::try_from(versions.len()).unwrap_or(0) + 1;
            state.lab = lab;
            state.versions = versions;
        }
        fake
    }

    /// A draft-status lab whose only version is the pinned draft `ver-1`.
    pub fn with_draft() -> Self {
        let mut lab = lab(LabStatus::Draft);
        lab.current_draft_version_id = Some("ver-1".into());
        Self::new(lab, vec![draft("ver-1", 1)])
    }

    pub fn arc(&self) -> Arc<dyn LabsBackend> {
        Arc::new(self.clone())
    }

    pub fn fail_update(&self, failure: Failure) {
        self.lock().fail_update = Some(failure);
    }

    pub fn fail_create(&self, failure: Failure) {
        self.lock().fail_create = Some(failure);
    }

    pub fn fail_publish(&self, failure: Failure) {
        self.lock().fail_publish = Some(failure);
    }

    /// Updates never complete.
    pub fn hang_update(&self) {
        self.lock().hang_update = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                !matches!(
                    call,
                    Call::GetLab(_) | Call::ListVersions(_) | Call::GetVersion(_)
                )
            })
            .collect()
    }

    pub fn lab(&self) -> Lab {
        self.lock().lab.clone()
    }

    pub fn versions(&self) -> Vec<LabVersion> {
        self.lock().versions.clone()
    }

    pub fn version(&self, version_id: &str) -> Option<LabVersion> {
        self.lock()
            .versions
            .iter()
            .find(|v| v.entity_id() == version_id)
            .cloned()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

pub fn lab(status: LabStatus) -> Lab {
    Lab {
        id: Some(LAB_ID.into()),
        title: Some("Two Sum".into()),
        status: Some(status),
        created_at: Some("2026-01-01T00:00:00Z".into()),
        ..Lab::default()
    }
}

/// A version created `minute` minutes after the lab.
pub fn version(id: &str, minute: u32, is_draft: bool) -> LabVersion {
    LabVersion {
        id: Some(id.into()),
        lab_id: Some(LAB_ID.into()),
        is_draft,
        created_at: Some(format!("2026-01-01T00:{minute:02}:00Z")),
        ..LabVersion::default()
    }
}

pub fn draft(id: &str, minute: u32) -> LabVersion {
    version(id, minute, true)
}

pub fn published(id: &str, minute: u32) -> LabVersion {
    version(id, minute, false)
}

fn apply_payload(version: &mut LabVersion, payload: &DraftVersionPayload) {
    if payload.language.is_some() {
        version.language = payload.language;
    }
    if let Some(prompt) = &payload.prompt_markdown {
        version.prompt_markdown = Some(prompt.clone());
    }
    if let Some(hints) = &payload.hints {
        version.hints.clone_from(hints);
    }
    if let Some(code) = &payload.starter_code {
        version.starter_code = Some(code.clone());
    }
    if payload.sample_tests.is_some() {
        version.sample_tests.clone_from(&payload.sample_tests);
    }
    if payload.hidden_tests.is_some() {
        version.hidden_tests.clone_from(&payload.hidden_tests);
    }
    if payload.runner.is_some() {
        version.runner.clone_from(&payload.runner);
    }
    if payload.reference_solution.is_some() {
        version
            .reference_solution
            .clone_from(&payload.reference_solution);
    }
}

#[async_trait]
impl LabsBackend for FakeBackend {
    async fn get_lab(&self, lab_id: &str) -> Result<Lab, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::GetLab(lab_id.into()));
        Ok(state.lab.clone())
    }

    async fn create_lab(&self, dto: &CreateLabDto) -> Result<Lab, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::CreateLab(dto.clone()));
        state.lab = Lab {
            id: Some(LAB_ID.into()),
            workshop_id: Some(dto.workshop_id.clone()),
            slug: Some(dto.slug.clone()),
            title: Some(dto.title.clone()),
            tags: dto.tags.clone(),
            difficulty: Some(dto.difficulty),
            status: Some(LabStatus::Draft),
            ..Lab::default()
        };
        Ok(state.lab.clone())
    }

    async fn archive_lab(&self, lab_id: &str, archived_by: &str) -> Result<(), ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::ArchiveLab {
            lab_id: lab_id.into(),
            archived_by: archived_by.into(),
        });
        state.lab.status = Some(LabStatus::Archived);
        Ok(())
    }

    async fn list_versions(&self, lab_id: &str) -> Result<Vec<LabVersion>, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::ListVersions(lab_id.into()));
        Ok(state.versions.clone())
    }

    async fn get_version(
        &self,
        _lab_id: &str,
        version_id: &str,
    ) -> Result<LabVersion, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::GetVersion(version_id.into()));
        state
            .versions
            .iter()
            .find(|v| v.entity_id() == version_id)
            .cloned()
            .ok_or(ClientError::MissingTarget { status: 404 })
    }

    async fn create_draft_version(
        &self,
        lab_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::CreateDraft(payload.clone()));
        if let Some(failure) = state.fail_create {
            return Err(failure.to_error());
        }

        let id = format!("ver-{}", state.next_id);
        state.next_id += 1;
        let mut created = LabVersion {
            id: Some(id.clone()),
            lab_id: Some(lab_id.into()),
            is_draft: true,
            created_at: Some(format!("2026-01-02T00:00:{:02}Z", state.next_id)),
            ..LabVersion::default()
        };
        apply_payload(&mut created, payload);
        state.versions.push(created.clone());
        state.lab.current_draft_version_id = Some(id);
        Ok(created)
    }

    async fn update_draft_version(
        &self,
        _lab_id: &str,
        version_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        let hang = {
            let mut state = self.lock();
            state.calls.push(Call::UpdateDraft {
                version_id: version_id.into(),
                payload: payload.clone(),
            });
            state.hang_update
        };
        if hang {
            std::future::pending::<()>().await;
        }

        let mut state = self.lock();
        if let Some(failure) = state.fail_update {
            return Err(failure.to_error());
        }
        let target = state
            .versions
            .iter_mut()
            .find(|v| v.is_draft && v.entity_id() == version_id)
            .ok_or(ClientError::MissingTarget { status: 404 })?;
        apply_payload(target, payload);
        Ok(target.clone())
    }

    async fn publish_version(
        &self,
        _lab_id: &str,
        version_id: &str,
        dto: &PublishVersionDto,
    ) -> Result<LabVersion, ClientError> {
        let mut state = self.lock();
        state.calls.push(Call::Publish {
            version_id: version_id.into(),
            published_by: dto.published_by.clone(),
        });
        if let Some(failure) = state.fail_publish {
            return Err(failure.to_error());
        }

        let target = state
            .versions
            .iter_mut()
            .find(|v| v.is_draft && v.entity_id() == version_id)
            .ok_or(ClientError::MissingTarget { status: 404 })?;
        target.is_draft = false;
        target.published_at = Some("2026-01-03T00:00:00Z".into());
        let published = target.clone();

        state.lab.status = Some(LabStatus::Published);
        state.lab.latest_published_version_id = Some(version_id.into());
        if state.lab.current_draft_version_id.as_deref() == Some(version_id) {
            state.lab.current_draft_version_id = None;
        }
        Ok(published)
    }
}
