//! Replays [`ResponseTemplate`]s onto a [`ResponseBuilder`].
//!
//! Templates go through the same builder operations as hand-written code, so
//! a rendered template and the equivalent builder chain produce identical
//! responses.

use skill_response_types::card::Image;
use skill_response_types::error::TemplateError;
use skill_response_types::response::Response;
use skill_response_types::template::{CardTemplate, ResponseTemplate, SpeechTemplate};

use crate::builder::ResponseBuilder;

/// Apply a template on top of whatever the builder already holds.
///
/// Sections the template leaves out do not touch the builder. Attributes are
/// merged key by key; directives replace the existing list.
pub fn apply_template(
    template: &ResponseTemplate,
    builder: &mut ResponseBuilder,
) -> Result<(), TemplateError> {
    template.validate()?;

    if let Some(speech) = &template.speech {
        apply_speech(speech, builder, SpeechTarget::Output);
    }
    if let Some(reprompt) = &template.reprompt {
        apply_speech(reprompt, builder, SpeechTarget::Reprompt);
    }

    match &template.card {
        Some(CardTemplate::Simple { title, content }) => {
            builder.with_simple_card(title, content);
        }
        Some(CardTemplate::Standard {
            title,
            text,
            small_image_url,
            large_image_url,
        }) => {
            builder.with_standard_card(title, text, Image::new(small_image_url, large_image_url));
        }
        None => {}
    }

    for (key, value) in &template.attributes {
        builder.with_attribute(key.clone(), value.clone());
    }
    if let Some(directives) = &template.directives {
        builder.with_directives(directives.clone());
    }
    if let Some(should_end_session) = template.should_end_session {
        builder.should_end_session(should_end_session);
    }

    tracing::debug!(
        attributes = template.attributes.len(),
        has_card = template.card.is_some(),
        "applied response template"
    );
    Ok(())
}

/// Render a template onto a fresh builder.
pub fn render_template(template: &ResponseTemplate) -> Result<Response, TemplateError> {
    let mut builder = ResponseBuilder::new();
    apply_template(template, &mut builder)?;
    Ok(builder.build())
}

#[derive(Clone, Copy)]
enum SpeechTarget {
    Output,
    Reprompt,
}

fn apply_speech(speech: &SpeechTemplate, builder: &mut ResponseBuilder, target: SpeechTarget) {
    // Play behavior first: the lazily created speech is reused by the content call.
    if let Some(behavior) = &speech.play_behavior {
        match target {
            SpeechTarget::Output => builder.output_speech_play_behavior(behavior),
            SpeechTarget::Reprompt => builder.reprompt_play_behavior(behavior),
        };
    }
    if let Some(text) = &speech.text {
        match target {
            SpeechTarget::Output => builder.with_text_output_speech(text),
            SpeechTarget::Reprompt => builder.with_text_reprompt(text),
        };
    }
    if let Some(ssml) = &speech.ssml {
        match target {
            SpeechTarget::Output => builder.with_ssml_output_speech(ssml),
            SpeechTarget::Reprompt => builder.with_ssml_reprompt(ssml),
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
