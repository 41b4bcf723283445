//! # lab-client
//!
//! HTTP client for the coding lab persistence service.
//!
//! Covers the lab catalog (`/labs`), the version lifecycle
//! (`/labs/{id}/versions/...`) and lab embeds (`/embeds`). The editor talks
//! to the service through the [`LabsBackend`] trait so it can be driven by
//! an in-memory fake in tests.

pub mod backend;
pub mod embeds;
pub mod labs;
pub mod versions;

mod error;
mod http;

pub use backend::LabsBackend;
pub use error::ClientError;

use std::time::Duration;

use lab_config::ApiConfig;

/// HTTP client for the labs service.
#[derive(Debug, Clone)]
pub struct LabsClient {
    http: reqwest::Client,
    base_url: String,
}

impl LabsClient {
    /// Create a client for `base_url` with the given timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when `base_url` is blank or not
    /// an `http(s)://` URL, and [`ClientError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`LabsClient::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(
            config.normalized_base_url(),
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }
}
