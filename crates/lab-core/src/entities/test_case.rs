use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::de::{null_as_default, object_or_empty};
use crate::entities::JsonObject;
use crate::enums::{ComparatorKind, TestCaseKind};

/// Name given to a test case whose name was left blank.
pub const FALLBACK_CASE_NAME: &str = "case";

/// Comparison policy for one test case.
///
/// Booleans default to `false` and `kind` to `deepEqual` when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comparator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: ComparatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normalize_whitespace: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ignore_case: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_comparator_id: Option<String>,
}

impl Comparator {
    #[must_use]
    pub fn of_kind(kind: ComparatorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Tolerance as the runner will read it: `None` unless the kind is
    /// `numberTolerance`.
    #[must_use]
    pub fn effective_tolerance(&self) -> Option<f64> {
        self.tolerance.filter(|_| self.kind.uses_tolerance())
    }

    /// Drop a tolerance that the comparator kind would ignore.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            tolerance: self.effective_tolerance(),
            ..self
        }
    }
}

/// One input/output test case.
///
/// After [`TestCase::normalized`] the `input` and `expected` fields are JSON
/// objects, the name is non-blank, and the comparator is normalized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: TestCaseKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub input: JsonObject,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub expected: JsonObject,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comparator: Comparator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl TestCase {
    /// A blank input/output case using the `deepEqual` comparator.
    #[must_use]
    pub fn new_io(name: impl Into<String>) -> Self {
        Self {
            kind: TestCaseKind::Io,
            name: name.into(),
            input: JsonObject::new(),
            expected: JsonObject::new(),
            comparator: Comparator::of_kind(ComparatorKind::DeepEqual),
            test_code: None,
            framework: None,
        }
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        let name = if self.name.trim().is_empty() {
            FALLBACK_CASE_NAME.to_string()
        } else {
            self.name
        };
        Self {
            kind: TestCaseKind::Io,
            name,
            comparator: self.comparator.normalized(),
            ..self
        }
    }
}
