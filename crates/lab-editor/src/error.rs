//! Editor error types.

use lab_client::ClientError;
use lab_core::CoreError;
use thiserror::Error;

use crate::gate::PublishViolation;

/// A session operation that must not overlap with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Publish,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Publish => "publish",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    /// The edit buffer failed the publish gate. No request was sent.
    #[error("{0}")]
    Validation(PublishViolation),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writes against an archived lab are refused locally.
    #[error("lab {lab_id} is archived")]
    Archived { lab_id: String },

    /// A save or publish is already in flight.
    #[error("a {0} is already in progress")]
    Busy(Operation),

    /// Something the workflow needs was not found.
    #[error("not found: {0}")]
    Missing(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EditorError {
    /// Whether the failure came from the service (as opposed to a local check).
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}
