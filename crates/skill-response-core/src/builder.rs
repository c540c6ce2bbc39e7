//! Fluent builder for skill responses.
//!
//! Every method mutates the builder and hands back `&mut Self`, so calls chain
//! on a temporary as well as on a named binding:
//!
//! ```
//! use skill_response_core::builder::ResponseBuilder;
//!
//! let response = ResponseBuilder::new()
//!     .with_text_output_speech("hi")
//!     .should_end_session(false)
//!     .build();
//! assert_eq!(response.version, "1.0");
//! ```
//!
//! Speech and reprompt sub-structures are created lazily on first touch and
//! reused afterwards, so a play behavior set before the text survives it.

use serde_json::Value;

use skill_response_types::card::{Card, Image};
use skill_response_types::response::{Body, RESPONSE_VERSION, Response, SessionAttributes};
use skill_response_types::speech::{OutputSpeech, Reprompt};

/// Accumulates the parts of a [`Response`].
///
/// There is no internal locking: share a builder across threads only behind
/// your own synchronization.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    session_attributes: SessionAttributes,
    output_speech: Option<OutputSpeech>,
    card: Option<Card>,
    reprompt: Option<Reprompt>,
    directives: Option<Vec<Value>>,
    should_end_session: bool,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    /// Empty builder: no attributes, no optional parts, session ends.
    pub fn new() -> Self {
        Self {
            session_attributes: SessionAttributes::new(),
            output_speech: None,
            card: None,
            reprompt: None,
            directives: None,
            should_end_session: true,
        }
    }

    /// Replace the session attributes wholesale.
    pub fn with_attributes(&mut self, attributes: SessionAttributes) -> &mut Self {
        self.session_attributes = attributes;
        self
    }

    /// Insert a single session attribute, overwriting an existing key.
    pub fn with_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.session_attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_output_speech(&mut self, output_speech: OutputSpeech) -> &mut Self {
        self.output_speech = Some(output_speech);
        self
    }

    /// Tag the output speech `PlainText` and set its text.
    pub fn with_text_output_speech(&mut self, text: impl Into<String>) -> &mut Self {
        self.output_speech_mut().set_text(text);
        self
    }

    /// Tag the output speech `ssml` and set its markup.
    pub fn with_ssml_output_speech(&mut self, ssml: impl Into<String>) -> &mut Self {
        self.output_speech_mut().set_ssml(ssml);
        self
    }

    /// Set the play behavior of the output speech, leaving type and content alone.
    pub fn output_speech_play_behavior(&mut self, behavior: impl Into<String>) -> &mut Self {
        self.output_speech_mut().play_behavior = Some(behavior.into());
        self
    }

    pub fn with_card(&mut self, card: Card) -> &mut Self {
        self.card = Some(card);
        self
    }

    pub fn with_simple_card(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> &mut Self {
        self.card = Some(Card::simple(title, content));
        self
    }

    /// Standard card with title, text and image. No type tag is written.
    pub fn with_standard_card(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        image: Image,
    ) -> &mut Self {
        self.card = Some(Card::standard(title, text, image));
        self
    }

    pub fn with_reprompt(&mut self, reprompt: Reprompt) -> &mut Self {
        self.reprompt = Some(reprompt);
        self
    }

    pub fn with_text_reprompt(&mut self, text: impl Into<String>) -> &mut Self {
        self.reprompt_speech_mut().set_text(text);
        self
    }

    pub fn with_ssml_reprompt(&mut self, ssml: impl Into<String>) -> &mut Self {
        self.reprompt_speech_mut().set_ssml(ssml);
        self
    }

    pub fn reprompt_play_behavior(&mut self, behavior: impl Into<String>) -> &mut Self {
        self.reprompt_speech_mut().play_behavior = Some(behavior.into());
        self
    }

    /// Replace the directive list wholesale.
    pub fn with_directives(&mut self, directives: Vec<Value>) -> &mut Self {
        self.directives = Some(directives);
        self
    }

    /// Append one directive, starting the list if needed.
    pub fn add_directive(&mut self, directive: Value) -> &mut Self {
        self.directives.get_or_insert_with(Vec::new).push(directive);
        self
    }

    pub fn should_end_session(&mut self, should_end_session: bool) -> &mut Self {
        self.should_end_session = should_end_session;
        self
    }

    /// Snapshot the current state into a [`Response`].
    ///
    /// The builder is left untouched and can keep being mutated.
    pub fn build(&self) -> Response {
        tracing::debug!(
            has_output_speech = self.output_speech.is_some(),
            has_card = self.card.is_some(),
            has_reprompt = self.reprompt.is_some(),
            directives = self.directives.as_ref().map_or(0, Vec::len),
            attributes = self.session_attributes.len(),
            should_end_session = self.should_end_session,
            "building response"
        );

        Response {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: self.session_attributes.clone(),
            response: Body {
                output_speech: self.output_speech.clone(),
                card: self.card.clone(),
                reprompt: self.reprompt.clone(),
                directives: self.directives.clone(),
                should_end_session: self.should_end_session,
            },
        }
    }

    fn output_speech_mut(&mut self) -> &mut OutputSpeech {
        self.output_speech.get_or_insert_with(|| {
            tracing::trace!("initializing output speech");
            OutputSpeech::default()
        })
    }

    fn reprompt_speech_mut(&mut self) -> &mut OutputSpeech {
        &mut self
            .reprompt
            .get_or_insert_with(|| {
                tracing::trace!("initializing reprompt");
                Reprompt::default()
            })
            .output_speech
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
