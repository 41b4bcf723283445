use std::sync::Arc;

use anyhow::Context;
use lab_client::{LabsBackend, LabsClient};
use lab_config::LabConfig;
use lab_editor::EditorDefaults;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LabConfig,
    pub client: Arc<LabsClient>,
}

impl AppContext {
    /// Validate the network settings and build the service client.
    pub fn init(config: LabConfig) -> anyhow::Result<Self> {
        warn_unconfigured(&config);
        config
            .validate_for_network()
            .context("labctl is not configured to reach the labs service")?;

        let client = LabsClient::from_config(&config.api)
            .with_context(|| format!("failed to build client for {}", config.api.base_url))?;
        tracing::debug!(base_url = client.base_url(), "labs client ready");

        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    pub fn backend(&self) -> Arc<dyn LabsBackend> {
        self.client.clone()
    }

    pub fn actor(&self) -> &str {
        self.config.actor.id.trim()
    }

    pub fn editor_defaults(&self) -> EditorDefaults {
        EditorDefaults::from(&self.config.editor)
    }
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
fn warn_unconfigured(config: &LabConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LabConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "CODELAB_API") {
        warnings.push(
            "API config appears default while CODELAB_API* env vars exist. Use double underscores (example: CODELAB_API__BASE_URL)."
                .to_string(),
        );
    }
    if !config.actor.is_configured() && has_single_underscore_key(&env_keys, "CODELAB_ACTOR") {
        warnings.push(
            "Actor config appears default while CODELAB_ACTOR* env vars exist. Use double underscores (example: CODELAB_ACTOR__ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn single_underscore_keys_are_flagged() {
        let warnings = collect_unconfigured_warnings(
            &LabConfig::default(),
            env(&["CODELAB_API_BASE_URL", "CODELAB_ACTOR_ID"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CODELAB_API__BASE_URL"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &LabConfig::default(),
            env(&["CODELAB_API__BASE_URL", "PATH"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_are_not_flagged() {
        let mut config = LabConfig::default();
        config.api.base_url = "http://localhost:3000".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["CODELAB_API_BASE_URL"]));
        assert!(warnings.is_empty());
    }
}
