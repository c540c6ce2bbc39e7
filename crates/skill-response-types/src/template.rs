//! Declarative response templates.
//!
//! A `ResponseTemplate` describes a response in a config file instead of
//! code. Templates are written in TOML, JSON or YAML and replayed onto a
//! builder by `skill-response-core`.
//!
//! ```toml
//! should_end_session = false
//!
//! [speech]
//! text = "Welcome back!"
//!
//! [reprompt]
//! ssml = "<speak>Are you still there?</speak>"
//!
//! [card]
//! type = "simple"
//! title = "Welcome"
//! content = "Say 'help' to get started."
//!
//! [attributes]
//! visits = 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TemplateError;

/// File format a template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Toml,
    Json,
    Yaml,
}

impl TemplateFormat {
    /// Pick the format from a file extension (`.toml`, `.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "toml" => Ok(TemplateFormat::Toml),
            "json" => Ok(TemplateFormat::Json),
            "yaml" | "yml" => Ok(TemplateFormat::Yaml),
            other => Err(TemplateError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A declarative description of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<SpeechTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardTemplate>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Speech section of a template. At most one of `text`/`ssml` may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_behavior: Option<String>,
}

/// Card section of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardTemplate {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        small_image_url: String,
        large_image_url: String,
    },
}

impl ResponseTemplate {
    /// Parse a template in the given format and validate it.
    pub fn parse(content: &str, format: TemplateFormat) -> Result<Self, TemplateError> {
        let template: Self = match format {
            TemplateFormat::Toml => {
                toml::from_str(content).map_err(|e| TemplateError::Toml(e.to_string()))?
            }
            TemplateFormat::Json => {
                serde_json::from_str(content).map_err(|e| TemplateError::Json(e.to_string()))?
            }
            TemplateFormat::Yaml => {
                serde_yaml_ng::from_str(content).map_err(|e| TemplateError::Yaml(e.to_string()))?
            }
        };
        template.validate()?;
        Ok(template)
    }

    /// Reject speech sections that set both `text` and `ssml`.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.speech.as_ref().is_some_and(SpeechTemplate::is_conflicting) {
            return Err(TemplateError::ConflictingSpeech("speech"));
        }
        if self.reprompt.as_ref().is_some_and(SpeechTemplate::is_conflicting) {
            return Err(TemplateError::ConflictingSpeech("reprompt"));
        }
        Ok(())
    }
}

impl SpeechTemplate {
    fn is_conflicting(&self) -> bool {
        self.text.is_some() && self.ssml.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
