//! `skresp inspect` -- summarize an existing response document.

use std::io::Read;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use skill_response_types::response::Response;
use skill_response_types::speech::OutputSpeech;

use crate::output::print_response;

/// Handle `skresp inspect`.
///
/// With `--json` the document is echoed back normalized, which drops content
/// fields the speech type tag hides.
pub fn run(input: &str, json: bool, pretty: bool) -> Result<()> {
    let raw = read_input(input)?;
    let response = parse_response(&raw, input)?;

    if json {
        return print_response(&response, pretty);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Field").fg(Color::White),
        Cell::new("Value").fg(Color::White),
    ]);
    for (field, value) in summarize(&response) {
        table.add_row(vec![
            Cell::new(field).fg(Color::Cyan),
            Cell::new(&value).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("  {} Response v{}", style("▸").bold(), style(&response.version).cyan());
    println!();
    println!("{table}");
    println!();
    Ok(())
}

fn parse_response(raw: &str, input: &str) -> Result<Response> {
    Response::from_json(raw).with_context(|| format!("Failed to parse response from {input}"))
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read response from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
}

/// One row per populated part of the response.
pub fn summarize(response: &Response) -> Vec<(&'static str, String)> {
    let body = &response.response;
    let mut rows = Vec::new();

    if let Some(speech) = &body.output_speech {
        rows.push(("outputSpeech", describe_speech(speech)));
    }
    if let Some(reprompt) = &body.reprompt {
        rows.push(("reprompt", describe_speech(&reprompt.output_speech)));
    }
    if let Some(card) = &body.card {
        let kind = card
            .card_type
            .map_or_else(|| "untyped".to_string(), |t| t.to_string());
        let image = if card.image.is_some() { ", image" } else { "" };
        rows.push(("card", format!("{kind}: {}{image}", card.title)));
    }
    if let Some(directives) = &body.directives {
        rows.push(("directives", directives.len().to_string()));
    }
    if !response.session_attributes.is_empty() {
        let keys: Vec<&str> = response.session_attributes.keys().map(String::as_str).collect();
        rows.push(("sessionAttributes", keys.join(", ")));
    }
    rows.push(("shouldEndSession", body.should_end_session.to_string()));
    rows
}

fn describe_speech(speech: &OutputSpeech) -> String {
    let kind = speech
        .speech_type
        .map_or_else(|| "untyped".to_string(), |t| t.to_string());
    let mut description = match speech.content() {
        Some(content) => format!("{kind}: {}", preview(content)),
        None => kind,
    };
    if let Some(behavior) = &speech.play_behavior {
        description.push_str(&format!(" ({behavior})"));
    }
    description
}

fn preview(content: &str) -> String {
    if content.chars().count() > 60 {
        let head: String = content.chars().take(57).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_response_core::builder::ResponseBuilder;
    use skill_response_types::card::Image;

    #[test]
    fn test_reemitted_json_drops_hidden_content() {
        let raw = r#"{
            "version": "1.0",
            "response": {
                "outputSpeech": {"type": "ssml", "text": "a", "ssml": "b"},
                "shouldEndSession": true
            }
        }"#;
        let response = parse_response(raw, "-").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&response.to_json().unwrap()).unwrap();

        let speech = &value["response"]["outputSpeech"];
        assert_eq!(speech, &serde_json::json!({"type": "ssml", "ssml": "b"}));
        assert!(speech.get("text").is_none());
        assert_eq!(value["sessionAttributes"], serde_json::json!({}));
    }

    #[test]
    fn test_parse_response_reports_input() {
        let err = parse_response("{", "reply.json").unwrap_err();
        assert!(err.to_string().contains("reply.json"));
    }

    #[test]
    fn test_summarize_empty_response() {
        let response = ResponseBuilder::new().build();
        assert_eq!(summarize(&response), vec![("shouldEndSession", "true".to_string())]);
    }

    #[test]
    fn test_summarize_full_response() {
        let response = ResponseBuilder::new()
            .with_ssml_output_speech("<speak>hi</speak>")
            .output_speech_play_behavior("ENQUEUE")
            .with_text_reprompt("still there?")
            .with_standard_card("Weather", "Sunny", Image::new("s", "l"))
            .with_attribute("city", "Oslo")
            .add_directive(serde_json::json!({"type": "AudioPlayer.Stop"}))
            .should_end_session(false)
            .build();

        assert_eq!(
            summarize(&response),
            vec![
                ("outputSpeech", "ssml: <speak>hi</speak> (ENQUEUE)".to_string()),
                ("reprompt", "PlainText: still there?".to_string()),
                ("card", "untyped: Weather, image".to_string()),
                ("directives", "1".to_string()),
                ("sessionAttributes", "city".to_string()),
                ("shouldEndSession", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_describe_play_behavior_only_speech() {
        let speech = OutputSpeech {
            play_behavior: Some("REPLACE_ALL".to_string()),
            ..Default::default()
        };
        assert_eq!(describe_speech(&speech), "untyped (REPLACE_ALL)");
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "a".repeat(80);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), 60);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }
}
