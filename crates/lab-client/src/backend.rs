//! The persistence seam the editor core is written against.

use async_trait::async_trait;
use lab_core::entities::{Lab, LabVersion};
use lab_core::requests::{CreateLabDto, DraftVersionPayload, PublishVersionDto};

use crate::{LabsClient, error::ClientError};

/// Operations the authoring workflows need from the labs service.
///
/// [`LabsClient`] is the production implementation. Failures that mean "the
/// addressed resource is gone" must surface as
/// [`ClientError::MissingTarget`], since draft recovery keys off that variant.
#[async_trait]
pub trait LabsBackend: Send + Sync {
    async fn get_lab(&self, lab_id: &str) -> Result<Lab, ClientError>;

    async fn create_lab(&self, dto: &CreateLabDto) -> Result<Lab, ClientError>;

    async fn archive_lab(&self, lab_id: &str, archived_by: &str) -> Result<(), ClientError>;

    async fn list_versions(&self, lab_id: &str) -> Result<Vec<LabVersion>, ClientError>;

    async fn get_version(&self, lab_id: &str, version_id: &str)
    -> Result<LabVersion, ClientError>;

    async fn create_draft_version(
        &self,
        lab_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError>;

    async fn update_draft_version(
        &self,
        lab_id: &str,
        version_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError>;

    async fn publish_version(
        &self,
        lab_id: &str,
        version_id: &str,
        dto: &PublishVersionDto,
    ) -> Result<LabVersion, ClientError>;
}

#[async_trait]
impl LabsBackend for LabsClient {
    async fn get_lab(&self, lab_id: &str) -> Result<Lab, ClientError> {
        Self::get_lab(self, lab_id).await
    }

    async fn create_lab(&self, dto: &CreateLabDto) -> Result<Lab, ClientError> {
        Self::create_lab(self, dto).await
    }

    async fn archive_lab(&self, lab_id: &str, archived_by: &str) -> Result<(), ClientError> {
        Self::archive_lab(self, lab_id, archived_by).await
    }

    async fn list_versions(&self, lab_id: &str) -> Result<Vec<LabVersion>, ClientError> {
        Self::list_versions(self, lab_id).await
    }

    async fn get_version(
        &self,
        lab_id: &str,
        version_id: &str,
    ) -> Result<LabVersion, ClientError> {
        Self::get_version(self, lab_id, version_id).await
    }

    async fn create_draft_version(
        &self,
        lab_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        Self::create_draft_version(self, lab_id, payload).await
    }

    async fn update_draft_version(
        &self,
        lab_id: &str,
        version_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        Self::update_draft_version(self, lab_id, version_id, payload).await
    }

    async fn publish_version(
        &self,
        lab_id: &str,
        version_id: &str,
        dto: &PublishVersionDto,
    ) -> Result<LabVersion, ClientError> {
        Self::publish_version(self, lab_id, version_id, dto).await
    }
}
