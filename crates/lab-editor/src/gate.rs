//! Preconditions a draft must meet before it may be published.
//!
//! Pure and synchronous: runs against the in-memory buffer only.

use lab_core::enums::TestSuiteKind;
use thiserror::Error;

use crate::buffer::EditBuffer;

/// One failed publish precondition. Variants are listed in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishViolation {
    #[error("prompt required")]
    PromptRequired,

    #[error("starter code required")]
    StarterCodeRequired,

    #[error("at least one sample test is required")]
    SampleTestRequired,

    #[error("runner timeoutMs must be between 100 and 300000")]
    TimeoutOutOfRange { timeout_ms: u64 },

    #[error("runner entryFnName is required")]
    EntryFnNameRequired,

    #[error("fix JSON parsing errors in tests before publishing")]
    JsonErrors,
}

/// Every violated rule, in check order.
#[must_use]
pub fn violations(buffer: &EditBuffer) -> Vec<PublishViolation> {
    let mut found = Vec::new();

    if buffer.prompt_markdown.trim().is_empty() {
        found.push(PublishViolation::PromptRequired);
    }
    if buffer.starter_code.trim().is_empty() {
        found.push(PublishViolation::StarterCodeRequired);
    }
    if buffer.tests.is_empty(TestSuiteKind::Sample) {
        found.push(PublishViolation::SampleTestRequired);
    }
    if !buffer.runner.timeout_in_range() {
        found.push(PublishViolation::TimeoutOutOfRange {
            timeout_ms: buffer.runner.timeout_ms,
        });
    }
    if buffer.runner.entry_fn_name.trim().is_empty() {
        found.push(PublishViolation::EntryFnNameRequired);
    }
    if buffer.tests.has_any_errors() {
        found.push(PublishViolation::JsonErrors);
    }

    found
}

/// The first violated rule, or `None` when the draft may be published.
#[must_use]
pub fn validate_for_publish(buffer: &EditBuffer) -> Option<PublishViolation> {
    violations(buffer).into_iter().next()
}
