//! Read-only rendering of a stored version.

use lab_core::entities::{LabVersion, TestCase};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestsView<'a> {
    sample_tests: &'a [TestCase],
    hidden_tests: &'a [TestCase],
}

/// Pretty-printed JSON of a version's tests and runner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionView {
    /// `{"sampleTests": [...], "hiddenTests": [...]}`
    pub tests_json: String,
    /// The runner config, or `{}` when the version has none.
    pub runner_json: String,
}

impl VersionView {
    #[must_use]
    pub fn from_version(version: &LabVersion) -> Self {
        let tests = TestsView {
            sample_tests: version.sample_tests.as_deref().unwrap_or_default(),
            hidden_tests: version.hidden_tests.as_deref().unwrap_or_default(),
        };
        let tests_json = serde_json::to_string_pretty(&tests).unwrap_or_else(|_| "{}".into());
        let runner_json = version
            .runner
            .as_ref()
            .and_then(|runner| serde_json::to_string_pretty(runner).ok())
            .unwrap_or_else(|| "{}".into());
        Self {
            tests_json,
            runner_json,
        }
    }
}
