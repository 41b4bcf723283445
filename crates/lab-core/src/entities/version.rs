use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::de::{null_as_default, strings_lenient};
use crate::entities::{TestCase, effective_id};
use crate::enums::LabLanguage;

pub const DEFAULT_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_ENTRY_FN_NAME: &str = "solve";
pub const DEFAULT_NODE_VERSION: &str = "20";

/// Bounds enforced on `timeoutMs` before a draft may be published.
pub const TIMEOUT_MS_RANGE: std::ops::RangeInclusive<u64> = 100..=300_000;

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_entry_fn_name() -> String {
    DEFAULT_ENTRY_FN_NAME.to_string()
}

fn default_node_version() -> String {
    DEFAULT_NODE_VERSION.to_string()
}

/// Execution constraints applied when a submission is graded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u32>,
    #[serde(default = "default_entry_fn_name")]
    pub entry_fn_name: String,
    #[serde(default = "default_node_version")]
    pub node_version: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            memory_mb: None,
            entry_fn_name: default_entry_fn_name(),
            node_version: default_node_version(),
        }
    }
}

impl RunnerConfig {
    #[must_use]
    pub fn timeout_in_range(&self) -> bool {
        TIMEOUT_MS_RANGE.contains(&self.timeout_ms)
    }
}

/// Author's reference solution and notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSolution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes_markdown: String,
}

/// A snapshot of a lab's content.
///
/// At most one version per lab is a draft. Published versions are never
/// edited again; further edits go to the next draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabVersion {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub lab_id: Option<String>,
    pub version_number: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_draft: bool,
    pub language: Option<LabLanguage>,
    pub prompt_markdown: Option<String>,
    #[serde(default, deserialize_with = "strings_lenient")]
    pub hints: Vec<String>,
    pub starter_code: Option<String>,
    pub reference_solution: Option<ReferenceSolution>,
    pub sample_tests: Option<Vec<TestCase>>,
    pub hidden_tests: Option<Vec<TestCase>>,
    pub runner: Option<RunnerConfig>,
    pub content_hash: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
}

impl LabVersion {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        effective_id(self.mongo_id.as_deref(), self.id.as_deref())
    }
}
