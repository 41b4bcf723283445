//! Lab embed listing (`/embeds`).

use lab_core::entities::LabEmbed;
use lab_core::requests::ListEmbedsQuery;

use crate::{
    LabsClient,
    error::ClientError,
    http::{query_string, read_json},
};

impl LabsClient {
    /// List embeds matching `query`. Blank filters are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, service, or parse failure.
    pub async fn list_embeds(&self, query: &ListEmbedsQuery) -> Result<Vec<LabEmbed>, ClientError> {
        let url = format!("{}{}", self.url(&["embeds"]), query_string(&query.params()));
        read_json(self.http.get(&url).send().await?).await
    }
}
