//! Cross-cutting error types for lab authoring.
//!
//! Transport failures live in `lab-client` and session failures in
//! `lab-editor`; this enum covers what the pure core can reject.

use thiserror::Error;

use crate::enums::LabStatus;

/// Errors that can be raised by the pure core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition: lab {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: LabStatus,
        to: LabStatus,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
