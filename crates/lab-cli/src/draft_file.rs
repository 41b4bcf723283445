//! The JSON file `labctl draft` commands read and write.
//!
//! It mirrors the edit buffer. Test `input`/`expected` may be JSON objects or
//! strings holding raw JSON text; text goes through the test suite editor so
//! malformed entries surface as row errors rather than load failures.

use std::path::Path;

use anyhow::Context;
use lab_core::entities::{Comparator, LabVersion, ReferenceSolution, RunnerConfig, TestCase};
use lab_core::enums::{LabLanguage, TestSuiteKind};
use lab_editor::{EditBuffer, EditorDefaults};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LabLanguage>,
    #[serde(default)]
    pub prompt_markdown: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub starter_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<RunnerConfig>,
    #[serde(default)]
    pub reference_solution: ReferenceSolution,
    /// Absent means "one default sample test", as for a loaded version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_tests: Option<Vec<TestEntry>>,
    #[serde(default)]
    pub hidden_tests: Vec<TestEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub comparator: Comparator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_code: Option<String>,
}

impl TestEntry {
    fn to_case(&self) -> TestCase {
        TestCase {
            comparator: self.comparator.clone(),
            test_code: self.test_code.clone(),
            ..TestCase::new_io(self.name.clone())
        }
    }

    fn from_case(case: &TestCase) -> Self {
        Self {
            name: case.name.clone(),
            input: Some(Value::Object(case.input.clone())),
            expected: Some(Value::Object(case.expected.clone())),
            comparator: case.comparator.clone(),
            test_code: case.test_code.clone(),
        }
    }
}

/// Editor text for one `input`/`expected` value. Anything that is neither an
/// object nor a string is kept as its JSON text so the editor rejects it.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "{}".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

impl DraftFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read draft file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse draft file {}", path.display()))
    }

    /// Build an edit buffer, filling gaps from `defaults`.
    pub fn to_buffer(&self, defaults: &EditorDefaults) -> EditBuffer {
        let version = LabVersion {
            language: self.language,
            prompt_markdown: Some(self.prompt_markdown.clone()),
            hints: self.hints.clone(),
            starter_code: Some(self.starter_code.clone()),
            runner: self.runner.clone(),
            reference_solution: Some(self.reference_solution.clone()),
            sample_tests: self
                .sample_tests
                .as_ref()
                .map(|entries| entries.iter().map(TestEntry::to_case).collect()),
            hidden_tests: Some(self.hidden_tests.iter().map(TestEntry::to_case).collect()),
            ..LabVersion::default()
        };
        let mut buffer = EditBuffer::from_version(&version, defaults);

        let suites = [
            (TestSuiteKind::Sample, self.sample_tests.as_deref().unwrap_or_default()),
            (TestSuiteKind::Hidden, self.hidden_tests.as_slice()),
        ];
        for (kind, entries) in suites {
            for (index, entry) in entries.iter().enumerate() {
                buffer
                    .tests
                    .set_input_text(kind, index, &field_text(entry.input.as_ref()));
                buffer
                    .tests
                    .set_expected_text(kind, index, &field_text(entry.expected.as_ref()));
            }
        }
        buffer
    }

    pub fn from_buffer(buffer: &EditBuffer) -> Self {
        let entries = |kind| {
            buffer
                .tests
                .tests(kind)
                .iter()
                .map(TestEntry::from_case)
                .collect::<Vec<_>>()
        };
        Self {
            language: Some(buffer.language),
            prompt_markdown: buffer.prompt_markdown.clone(),
            hints: buffer.hints.clone(),
            starter_code: buffer.starter_code.clone(),
            runner: Some(buffer.runner.clone()),
            reference_solution: buffer.reference_solution.clone(),
            sample_tests: Some(entries(TestSuiteKind::Sample)),
            hidden_tests: entries(TestSuiteKind::Hidden),
        }
    }
}
