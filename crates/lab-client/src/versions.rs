//! Version lifecycle endpoints (`/labs/{id}/versions`).

use lab_core::entities::LabVersion;
use lab_core::requests::{DraftVersionPayload, PublishVersionDto};

use crate::{LabsClient, error::ClientError, http::read_json};

impl LabsClient {
    /// List every version of a lab, in the order the service returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn list_versions(&self, lab_id: &str) -> Result<Vec<LabVersion>, ClientError> {
        read_json(
            self.http
                .get(self.url(&["labs", lab_id, "versions"]))
                .send()
                .await?,
        )
        .await
    }

    /// Fetch one version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingTarget`] when the version does not exist.
    pub async fn get_version(
        &self,
        lab_id: &str,
        version_id: &str,
    ) -> Result<LabVersion, ClientError> {
        read_json(
            self.http
                .get(self.url(&["labs", lab_id, "versions", version_id]))
                .send()
                .await?,
        )
        .await
    }

    /// Create the lab's draft version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn create_draft_version(
        &self,
        lab_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        read_json(
            self.http
                .post(self.url(&["labs", lab_id, "versions", "draft"]))
                .json(payload)
                .send()
                .await?,
        )
        .await
    }

    /// Overwrite a draft version with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingTarget`] when the draft is gone or no
    /// longer editable (404/405).
    pub async fn update_draft_version(
        &self,
        lab_id: &str,
        version_id: &str,
        payload: &DraftVersionPayload,
    ) -> Result<LabVersion, ClientError> {
        read_json(
            self.http
                .patch(self.url(&["labs", lab_id, "versions", version_id]))
                .json(payload)
                .send()
                .await?,
        )
        .await
    }

    /// Publish a draft version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn publish_version(
        &self,
        lab_id: &str,
        version_id: &str,
        dto: &PublishVersionDto,
    ) -> Result<LabVersion, ClientError> {
        read_json(
            self.http
                .post(self.url(&["labs", lab_id, "versions", version_id, "publish"]))
                .json(dto)
                .send()
                .await?,
        )
        .await
    }
}
