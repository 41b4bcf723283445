//! # lab-editor
//!
//! The draft editing core for coding labs.
//!
//! - [`resolver`] picks the one draft of a lab
//! - [`buffer`] and [`test_suite`] hold the in-memory edits
//! - [`gate`] checks a buffer before publishing
//! - [`orchestrator`] saves drafts, recreating stale ones
//! - [`session`] ties these together with in-flight flags and events
//! - [`authoring`] holds the lab-level workflows
//!
//! Everything that talks to the service goes through
//! [`lab_client::LabsBackend`].

pub mod authoring;
pub mod buffer;
pub mod error;
pub mod gate;
pub mod orchestrator;
pub mod resolver;
pub mod session;
pub mod test_suite;
pub mod view;

pub use buffer::{EditBuffer, EditorDefaults};
pub use error::{EditorError, Operation};
pub use gate::{PublishViolation, validate_for_publish};
pub use orchestrator::{DraftPersistence, PublishedDraft, SavedDraft, save_draft};
pub use resolver::resolve_draft;
pub use session::{EditorSession, SessionEvent, SessionFlags};
pub use test_suite::TestSuiteState;
pub use view::VersionView;
