//! CLI configuration loader.
//!
//! Reads `config.toml` from `--config` or the platform config directory and
//! deserializes it into [`CliConfig`]. Falls back to defaults when the file is
//! missing or malformed.

use std::path::{Path, PathBuf};

use skill_response_core::builder::ResponseBuilder;
use skill_response_types::config::CliConfig;

/// `{config_dir}/skill-response/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skill-response").join("config.toml"))
}

/// Load the explicit config path, or the default one when none was given.
pub fn resolve_cli_config(explicit: Option<&Path>) -> CliConfig {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_cli_config(&path),
        None => CliConfig::default(),
    }
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`CliConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub fn load_cli_config(path: &Path) -> CliConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return CliConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return CliConfig::default();
        }
    };

    match toml::from_str::<CliConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            CliConfig::default()
        }
    }
}

/// A builder pre-loaded with the configured defaults.
pub fn seed_builder(config: &CliConfig) -> ResponseBuilder {
    let mut builder = ResponseBuilder::new();
    builder
        .with_attributes(config.default_attributes.clone())
        .should_end_session(config.default_should_end_session);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_cli_config(&dir.path().join("config.toml"));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "pretty = false\n\n[default_attributes]\nlocale = \"de-DE\"\n",
        )
        .unwrap();

        let config = load_cli_config(&path);
        assert!(!config.pretty);
        assert!(config.default_should_end_session);
        assert_eq!(config.default_attributes["locale"], "de-DE");
    }

    #[test]
    fn test_load_malformed_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "pretty = \"maybe\"").unwrap();
        assert_eq!(load_cli_config(&path), CliConfig::default());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "default_should_end_session = false\n").unwrap();
        assert!(!resolve_cli_config(Some(&path)).default_should_end_session);
    }

    #[test]
    fn test_seed_builder_applies_defaults() {
        let config = CliConfig {
            default_should_end_session: false,
            default_attributes: json!({"tier": "free"}).as_object().cloned().unwrap(),
            ..Default::default()
        };
        let response = seed_builder(&config).build();
        assert!(!response.response.should_end_session);
        assert_eq!(response.session_attributes["tier"], "free");
    }
}
