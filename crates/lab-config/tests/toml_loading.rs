//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lab_config::LabConfig;
use lab_core::enums::LabLanguage;
use pretty_assertions::assert_eq;

#[test]
fn loads_api_and_actor_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://labs.example.com/api/"
timeout_secs = 30

[actor]
id = "author-42"
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://labs.example.com/api/");
        assert_eq!(config.api.normalized_base_url(), "https://labs.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.user_agent.starts_with("labctl/"));
        assert_eq!(config.actor.id, "author-42");
        assert!(config.validate_for_network().is_ok());
        Ok(())
    });
}

#[test]
fn loads_editor_defaults_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[editor]
language = "javascript"
timeout_ms = 5000
entry_fn_name = "main"
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.editor.language, LabLanguage::Javascript);
        assert_eq!(config.editor.timeout_ms, 5000);
        assert_eq!(config.editor.entry_fn_name, "main");
        // Untouched fields keep their defaults
        assert_eq!(config.editor.memory_mb, 256);
        assert_eq!(config.editor.node_version, "20");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".codelab")?;
        jail.create_file(
            ".codelab/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config: LabConfig = LabConfig::figment().extract()?;
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("CODELAB_API__BASE_URL", "http://localhost:8080");

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CODELAB_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:8080");
        Ok(())
    });
}

#[test]
fn invalid_toml_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[editor]
language = "python"
"#,
        )?;

        let result: Result<LabConfig, _> =
            Figment::from(Serialized::defaults(LabConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
