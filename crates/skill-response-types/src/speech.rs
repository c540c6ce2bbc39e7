//! Output speech and reprompt types.
//!
//! An [`OutputSpeech`] carries either plain text or an SSML string, selected
//! by its [`SpeechType`] tag. The tag set last decides which content field is
//! meaningful; the other one is kept in memory but never serialized.

use schemars::JsonSchema;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Content type tag of an output speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SpeechType {
    #[serde(rename = "PlainText")]
    PlainText,
    #[serde(rename = "ssml", alias = "SSML")]
    Ssml,
}

impl fmt::Display for SpeechType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechType::PlainText => write!(f, "PlainText"),
            SpeechType::Ssml => write!(f, "ssml"),
        }
    }
}

impl FromStr for SpeechType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(SpeechType::PlainText),
            "ssml" => Ok(SpeechType::Ssml),
            other => Err(format!("invalid speech type: '{other}'")),
        }
    }
}

/// Known play behaviors for speech and reprompts.
///
/// The schema fields stay free-form strings so values this enum does not
/// know about still pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayBehavior {
    /// Queue after whatever is currently playing.
    Enqueue,
    /// Interrupt and clear the queue.
    ReplaceAll,
    /// Replace everything queued, but let the current speech finish.
    ReplaceEnqueued,
}

impl PlayBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayBehavior::Enqueue => "ENQUEUE",
            PlayBehavior::ReplaceAll => "REPLACE_ALL",
            PlayBehavior::ReplaceEnqueued => "REPLACE_ENQUEUED",
        }
    }
}

impl fmt::Display for PlayBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ENQUEUE" => Ok(PlayBehavior::Enqueue),
            "REPLACE_ALL" => Ok(PlayBehavior::ReplaceAll),
            "REPLACE_ENQUEUED" => Ok(PlayBehavior::ReplaceEnqueued),
            other => Err(format!("invalid play behavior: '{other}'")),
        }
    }
}

impl From<PlayBehavior> for String {
    fn from(behavior: PlayBehavior) -> Self {
        behavior.as_str().to_string()
    }
}

/// Speech the assistant renders to the user.
///
/// Serialization emits only the content field matching `speech_type`. When no
/// tag is set (a speech that only carries a play behavior so far), whichever
/// content fields are present are emitted as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    #[serde(rename = "type", default)]
    pub speech_type: Option<SpeechType>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub ssml: Option<String>,
    #[serde(default)]
    pub play_behavior: Option<String>,
}

impl OutputSpeech {
    /// Plain text speech.
    pub fn text(text: impl Into<String>) -> Self {
        let mut speech = Self::default();
        speech.set_text(text);
        speech
    }

    /// SSML speech. The markup is passed through verbatim.
    pub fn ssml(ssml: impl Into<String>) -> Self {
        let mut speech = Self::default();
        speech.set_ssml(ssml);
        speech
    }

    /// Tag as `PlainText` and set the text. Any ssml already present is left
    /// in place but stops being serialized.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.speech_type = Some(SpeechType::PlainText);
        self.text = Some(text.into());
    }

    /// Tag as `ssml` and set the markup.
    pub fn set_ssml(&mut self, ssml: impl Into<String>) {
        self.speech_type = Some(SpeechType::Ssml);
        self.ssml = Some(ssml.into());
    }

    /// The content that will actually be serialized for the current tag.
    pub fn content(&self) -> Option<&str> {
        match self.speech_type {
            Some(SpeechType::PlainText) => self.text.as_deref(),
            Some(SpeechType::Ssml) => self.ssml.as_deref(),
            None => self.text.as_deref().or(self.ssml.as_deref()),
        }
    }
}

impl Serialize for OutputSpeech {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = match self.speech_type {
            Some(SpeechType::Ssml) => None,
            _ => self.text.as_ref(),
        };
        let ssml = match self.speech_type {
            Some(SpeechType::PlainText) => None,
            _ => self.ssml.as_ref(),
        };
        let len = usize::from(self.speech_type.is_some())
            + usize::from(text.is_some())
            + usize::from(ssml.is_some())
            + usize::from(self.play_behavior.is_some());

        let mut state = serializer.serialize_struct("OutputSpeech", len)?;
        match &self.speech_type {
            Some(speech_type) => state.serialize_field("type", speech_type)?,
            None => state.skip_field("type")?,
        }
        match text {
            Some(text) => state.serialize_field("text", text)?,
            None => state.skip_field("text")?,
        }
        match ssml {
            Some(ssml) => state.serialize_field("ssml", ssml)?,
            None => state.skip_field("ssml")?,
        }
        match &self.play_behavior {
            Some(behavior) => state.serialize_field("playBehavior", behavior)?,
            None => state.skip_field("playBehavior")?,
        }
        state.end()
    }
}

/// Speech played when the user does not answer in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            output_speech: OutputSpeech::text(text),
        }
    }

    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self {
            output_speech: OutputSpeech::ssml(ssml),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
