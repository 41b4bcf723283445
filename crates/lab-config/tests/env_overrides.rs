//! Environment variable overrides through the full figment chain.

use figment::Jail;
use lab_config::{ConfigError, LabConfig};
use pretty_assertions::assert_eq;

#[test]
fn env_fills_network_settings() {
    Jail::expect_with(|jail| {
        jail.set_env("CODELAB_API__BASE_URL", "https://labs.example.com");
        jail.set_env("CODELAB_API__TIMEOUT_SECS", "3");
        jail.set_env("CODELAB_ACTOR__ID", "author-env");

        let config: LabConfig = LabConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://labs.example.com");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.actor.id, "author-env");
        assert!(config.validate_for_network().is_ok());
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".codelab")?;
        jail.create_file(
            ".codelab/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;
        jail.set_env("CODELAB_GENERAL__DEFAULT_LIMIT", "7");

        let config: LabConfig = LabConfig::figment().extract()?;
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn malformed_base_url_fails_network_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CODELAB_API__BASE_URL", "labs.example.com");
        jail.set_env("CODELAB_ACTOR__ID", "author-env");

        let config: LabConfig = LabConfig::figment().extract()?;
        let err = config.validate_for_network().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}
