//! The in-memory edit buffer of one draft.
//!
//! The buffer is the source of truth until a save succeeds; failed saves
//! never touch it.

use lab_config::EditorConfig;
use lab_core::entities::{LabVersion, ReferenceSolution, RunnerConfig, TestCase};
use lab_core::enums::{LabLanguage, TestSuiteKind};
use lab_core::requests::DraftVersionPayload;
use lab_core::text::normalize_hints;

use crate::test_suite::TestSuiteState;

/// Values used when a loaded version leaves fields out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDefaults {
    pub language: LabLanguage,
    pub runner: RunnerConfig,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for EditorDefaults {
    fn from(config: &EditorConfig) -> Self {
        Self {
            language: config.language,
            runner: RunnerConfig {
                timeout_ms: config.timeout_ms,
                memory_mb: Some(config.memory_mb),
                entry_fn_name: config.entry_fn_name.clone(),
                node_version: config.node_version.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub language: LabLanguage,
    pub prompt_markdown: String,
    pub hints: Vec<String>,
    pub starter_code: String,
    pub runner: RunnerConfig,
    pub reference_solution: ReferenceSolution,
    pub tests: TestSuiteState,
}

impl EditBuffer {
    /// A buffer for a brand-new draft: one default sample test, no hidden tests.
    #[must_use]
    pub fn empty(defaults: &EditorDefaults) -> Self {
        Self::from_version(&LabVersion::default(), defaults)
    }

    /// Hydrate a buffer from a loaded version.
    ///
    /// A missing `sampleTests` (as opposed to an empty list) becomes one
    /// default `sample` case. A missing runner takes the configured defaults
    /// wholesale; a partial runner keeps what it has and only borrows the
    /// default memory limit.
    #[must_use]
    pub fn from_version(version: &LabVersion, defaults: &EditorDefaults) -> Self {
        let runner = match &version.runner {
            Some(runner) => RunnerConfig {
                memory_mb: runner.memory_mb.or(defaults.runner.memory_mb),
                ..runner.clone()
            },
            None => defaults.runner.clone(),
        };

        let sample = version
            .sample_tests
            .clone()
            .unwrap_or_else(|| vec![TestCase::new_io(TestSuiteKind::Sample.default_case_name())]);
        let hidden = version.hidden_tests.clone().unwrap_or_default();

        Self {
            language: version.language.unwrap_or(defaults.language),
            prompt_markdown: version.prompt_markdown.clone().unwrap_or_default(),
            hints: version.hints.clone(),
            starter_code: version.starter_code.clone().unwrap_or_default(),
            runner,
            reference_solution: version.reference_solution.clone().unwrap_or_default(),
            tests: TestSuiteState::from_tests(sample, hidden),
        }
    }

    // ---------------------------------------------------------------------------
    // Hints
    // ---------------------------------------------------------------------------

    /// Append a blank hint. Returns its index.
    pub fn add_hint(&mut self) -> usize {
        self.hints.push(String::new());
        self.hints.len() - 1
    }

    pub fn remove_hint(&mut self, index: usize) -> Option<String> {
        (index < self.hints.len()).then(|| self.hints.remove(index))
    }

    pub fn update_hint(&mut self, index: usize, text: &str) -> bool {
        match self.hints.get_mut(index) {
            Some(hint) => {
                text.clone_into(hint);
                true
            }
            None => false,
        }
    }

    /// Move a hint up (`-1`) or down (`+1`). Moves that would leave the list
    /// are ignored and return `false`.
    pub fn move_hint(&mut self, index: usize, delta: isize) -> bool {
        let Some(target) = index.checked_add_signed(delta) else {
            return false;
        };
        if index >= self.hints.len() || target >= self.hints.len() || target == index {
            return false;
        }
        let hint = self.hints.remove(index);
        self.hints.insert(target, hint);
        true
    }

    // ---------------------------------------------------------------------------
    // Payload
    // ---------------------------------------------------------------------------

    /// Everything needed to create or overwrite the draft, attributed to `actor`.
    #[must_use]
    pub fn to_payload(&self, actor: &str) -> DraftVersionPayload {
        DraftVersionPayload {
            created_by: actor.to_string(),
            language: Some(self.language),
            prompt_markdown: Some(self.prompt_markdown.clone()),
            hints: Some(normalize_hints(&self.hints)),
            starter_code: Some(self.starter_code.clone()),
            sample_tests: Some(self.tests.tests(TestSuiteKind::Sample)),
            hidden_tests: Some(self.tests.tests(TestSuiteKind::Hidden)),
            runner: Some(self.runner.clone()),
            reference_solution: Some(self.reference_solution.clone()),
        }
    }
}
