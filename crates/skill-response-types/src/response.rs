//! The top-level response envelope returned by a skill.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "sessionAttributes": { ... },
//!   "response": {
//!     "outputSpeech": { ... },
//!     "card": { ... },
//!     "reprompt": { "outputSpeech": { ... } },
//!     "directives": [ ... ],
//!     "shouldEndSession": true
//!   }
//! }
//! ```
//!
//! Optional body fields that were never populated are omitted entirely.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::card::Card;
use crate::error::ResponseError;
use crate::speech::{OutputSpeech, Reprompt};

/// Schema version written into every response.
pub const RESPONSE_VERSION: &str = "1.0";

/// Session attributes carried across turns by the caller's session store.
pub type SessionAttributes = Map<String, Value>;

/// A complete skill response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub version: String,
    #[serde(default)]
    pub session_attributes: SessionAttributes,
    pub response: Body,
}

impl Response {
    pub fn to_json(&self) -> Result<String, ResponseError> {
        serde_json::to_string(self).map_err(ResponseError::Serialize)
    }

    pub fn to_json_pretty(&self) -> Result<String, ResponseError> {
        serde_json::to_string_pretty(self).map_err(ResponseError::Serialize)
    }

    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(json).map_err(ResponseError::Parse)
    }
}

/// The body of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Device directives, passed through without inspection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<Value>>,
    #[serde(default = "default_should_end_session")]
    pub should_end_session: bool,
}

fn default_should_end_session() -> bool {
    true
}

impl Default for Body {
    fn default() -> Self {
        Self {
            output_speech: None,
            card: None,
            reprompt: None,
            directives: None,
            should_end_session: default_should_end_session(),
        }
    }
}

/// JSON schema describing [`Response`].
pub fn response_schema() -> schemars::Schema {
    schemars::schema_for!(Response)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
