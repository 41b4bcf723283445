//! Status enums, difficulty levels, languages, and comparator kinds.
//!
//! Lab-level enums serialize in lowercase as the persistence service expects.
//! Comparator kinds use the service's `camelCase` spelling (`deepEqual`).
//! `LabStatus` provides `allowed_next_states()` to enforce the lifecycle at
//! the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LabStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a lab.
///
/// ```text
/// draft → published → archived
///       → archived
/// ```
///
/// `published → published` is allowed: publishing a later draft keeps the lab
/// published and only moves the latest-published pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl LabStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Published, Self::Archived],
            Self::Published => &[Self::Published, Self::Archived],
            Self::Archived => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Archived labs accept no further drafts or publishes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LabDifficulty
// ---------------------------------------------------------------------------

/// Difficulty rating shown in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LabDifficulty {
    #[default]
    Intro,
    Easy,
    Medium,
    Hard,
}

impl LabDifficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for LabDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LabLanguage
// ---------------------------------------------------------------------------

/// Source language of a lab version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LabLanguage {
    #[default]
    Typescript,
    Javascript,
}

impl LabLanguage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Javascript => "javascript",
        }
    }
}

impl fmt::Display for LabLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComparatorKind
// ---------------------------------------------------------------------------

/// How an actual result is compared against the expected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ComparatorKind {
    StrictEqual,
    #[default]
    DeepEqual,
    StringNormalized,
    NumberTolerance,
}

impl ComparatorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrictEqual => "strictEqual",
            Self::DeepEqual => "deepEqual",
            Self::StringNormalized => "stringNormalized",
            Self::NumberTolerance => "numberTolerance",
        }
    }

    /// Only `numberTolerance` reads the `tolerance` field.
    #[must_use]
    pub const fn uses_tolerance(self) -> bool {
        matches!(self, Self::NumberTolerance)
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TestCaseKind
// ---------------------------------------------------------------------------

/// Shape of a test case. Only input/output cases exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseKind {
    #[default]
    Io,
}

// ---------------------------------------------------------------------------
// TestSuiteKind
// ---------------------------------------------------------------------------

/// Which of a version's two test collections a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestSuiteKind {
    Sample,
    Hidden,
}

impl TestSuiteKind {
    /// Placeholder name given to a freshly added test case.
    #[must_use]
    pub const fn default_case_name(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for TestSuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
