//! Configuration for the `skresp` command-line tool.
//!
//! `CliConfig` represents `config.toml` under the platform config directory
//! (`~/.config/skill-response/config.toml` on Linux). All fields have
//! sensible defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Pretty-print emitted JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// `shouldEndSession` applied before any command-specific setting.
    #[serde(default = "default_should_end_session")]
    pub default_should_end_session: bool,

    /// Session attributes every built response starts with.
    #[serde(default)]
    pub default_attributes: Map<String, Value>,
}

fn default_pretty() -> bool {
    true
}

fn default_should_end_session() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            default_should_end_session: default_should_end_session(),
            default_attributes: Map::new(),
        }
    }
}
