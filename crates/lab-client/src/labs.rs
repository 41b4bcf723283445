//! Lab catalog endpoints (`/labs`).

use lab_core::entities::Lab;
use lab_core::requests::{CreateLabDto, LabUpdate, ListLabsQuery};

use crate::{
    LabsClient,
    error::ClientError,
    http::{check_response, query_string, read_json},
};

impl LabsClient {
    /// List labs matching `query`. Blank filters are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_labs(&self, query: &ListLabsQuery) -> Result<Vec<Lab>, ClientError> {
        let url = format!("{}{}", self.url(&["labs"]), query_string(&query.params()));
        tracing::debug!(%url, "listing labs");
        read_json(self.http.get(&url).send().await?).await
    }

    /// Fetch one lab.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingTarget`] when the lab does not exist.
    pub async fn get_lab(&self, lab_id: &str) -> Result<Lab, ClientError> {
        read_json(self.http.get(self.url(&["labs", lab_id])).send().await?).await
    }

    /// Create a lab.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn create_lab(&self, dto: &CreateLabDto) -> Result<Lab, ClientError> {
        tracing::debug!(slug = %dto.slug, "creating lab");
        read_json(self.http.post(self.url(&["labs"])).json(dto).send().await?).await
    }

    /// Apply a partial update to a lab.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn update_lab(&self, lab_id: &str, update: &LabUpdate) -> Result<Lab, ClientError> {
        read_json(
            self.http
                .patch(self.url(&["labs", lab_id]))
                .json(update)
                .send()
                .await?,
        )
        .await
    }

    /// Archive a lab on behalf of `archived_by`. The service replies with no body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or service failure.
    pub async fn archive_lab(&self, lab_id: &str, archived_by: &str) -> Result<(), ClientError> {
        let url = format!(
            "{}{}",
            self.url(&["labs", lab_id]),
            query_string(&[("archivedBy", Some(archived_by.to_string()))])
        );
        tracing::debug!(lab_id, archived_by, "archiving lab");
        check_response(self.http.delete(&url).send().await?).await?;
        Ok(())
    }
}
