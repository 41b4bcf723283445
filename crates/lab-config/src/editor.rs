//! Defaults applied when a loaded version omits fields.

use lab_core::entities::{DEFAULT_ENTRY_FN_NAME, DEFAULT_NODE_VERSION, DEFAULT_TIMEOUT_MS};
use lab_core::enums::LabLanguage;
use serde::{Deserialize, Serialize};

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

const fn default_memory_mb() -> u32 {
    256
}

fn default_entry_fn_name() -> String {
    DEFAULT_ENTRY_FN_NAME.to_string()
}

fn default_node_version() -> String {
    DEFAULT_NODE_VERSION.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Language used when a version does not name one.
    #[serde(default)]
    pub language: LabLanguage,

    /// Runner timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Runner memory limit in megabytes.
    #[serde(default = "default_memory_mb")]
    pub memory_mb: u32,

    /// Function the runner invokes.
    #[serde(default = "default_entry_fn_name")]
    pub entry_fn_name: String,

    /// Node.js major version for the runner.
    #[serde(default = "default_node_version")]
    pub node_version: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            language: LabLanguage::default(),
            timeout_ms: default_timeout_ms(),
            memory_mb: default_memory_mb(),
            entry_fn_name: default_entry_fn_name(),
            node_version: default_node_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EditorConfig::default();
        assert_eq!(config.language, LabLanguage::Typescript);
        assert_eq!(config.timeout_ms, 3000);
        assert_eq!(config.memory_mb, 256);
        assert_eq!(config.entry_fn_name, "solve");
        assert_eq!(config.node_version, "20");
    }
}
