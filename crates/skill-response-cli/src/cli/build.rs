//! `skresp build` -- assemble a response from command-line flags.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use skill_response_core::builder::ResponseBuilder;
use skill_response_types::card::Image;
use skill_response_types::config::CliConfig;
use skill_response_types::speech::PlayBehavior;

use crate::config::seed_builder;
use crate::output::print_response;

/// Flags for `skresp build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Plain text output speech.
    #[arg(long, conflicts_with = "ssml")]
    pub text: Option<String>,

    /// SSML output speech (passed through verbatim).
    #[arg(long)]
    pub ssml: Option<String>,

    /// Output speech play behavior (ENQUEUE, REPLACE_ALL, REPLACE_ENQUEUED).
    #[arg(long)]
    pub play_behavior: Option<String>,

    /// Plain text reprompt.
    #[arg(long, conflicts_with = "reprompt_ssml")]
    pub reprompt_text: Option<String>,

    /// SSML reprompt.
    #[arg(long)]
    pub reprompt_ssml: Option<String>,

    /// Reprompt play behavior.
    #[arg(long)]
    pub reprompt_play_behavior: Option<String>,

    /// Card title. Produces a simple card unless `--card-text` is given.
    #[arg(long)]
    pub card_title: Option<String>,

    /// Simple card content.
    #[arg(long, requires = "card_title", conflicts_with = "card_text")]
    pub card_content: Option<String>,

    /// Standard card text. Needs both image URLs.
    #[arg(
        long,
        requires = "card_title",
        requires = "small_image_url",
        requires = "large_image_url"
    )]
    pub card_text: Option<String>,

    /// Standard card small image URL.
    #[arg(long, requires = "card_text")]
    pub small_image_url: Option<String>,

    /// Standard card large image URL.
    #[arg(long, requires = "card_text")]
    pub large_image_url: Option<String>,

    /// Session attribute (repeatable). VALUE is parsed as JSON, else kept as a string.
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,

    /// Directive as a JSON value (repeatable).
    #[arg(long = "directive", value_name = "JSON")]
    pub directives: Vec<String>,

    /// Keep the session open after this response.
    #[arg(long, conflicts_with = "end_session")]
    pub keep_session: bool,

    /// End the session after this response, overriding the configured default.
    #[arg(long)]
    pub end_session: bool,
}

/// Handle `skresp build`.
pub fn run(args: &BuildArgs, config: &CliConfig, pretty: bool) -> Result<()> {
    let mut builder = seed_builder(config);
    apply_build_args(args, &mut builder)?;
    print_response(&builder.build(), pretty)
}

/// Replay the flags onto a builder.
pub fn apply_build_args(args: &BuildArgs, builder: &mut ResponseBuilder) -> Result<()> {
    if let Some(behavior) = &args.play_behavior {
        check_play_behavior(behavior);
        builder.output_speech_play_behavior(behavior);
    }
    if let Some(text) = &args.text {
        builder.with_text_output_speech(text);
    }
    if let Some(ssml) = &args.ssml {
        builder.with_ssml_output_speech(ssml);
    }

    if let Some(behavior) = &args.reprompt_play_behavior {
        check_play_behavior(behavior);
        builder.reprompt_play_behavior(behavior);
    }
    if let Some(text) = &args.reprompt_text {
        builder.with_text_reprompt(text);
    }
    if let Some(ssml) = &args.reprompt_ssml {
        builder.with_ssml_reprompt(ssml);
    }

    if let Some(title) = &args.card_title {
        match &args.card_text {
            Some(text) => {
                let image = Image::new(
                    args.small_image_url.clone().unwrap_or_default(),
                    args.large_image_url.clone().unwrap_or_default(),
                );
                builder.with_standard_card(title, text, image);
            }
            None => {
                builder.with_simple_card(title, args.card_content.clone().unwrap_or_default());
            }
        }
    }

    for raw in &args.attributes {
        let (key, value) = parse_attribute(raw)?;
        builder.with_attribute(key, value);
    }
    for raw in &args.directives {
        let directive: Value = serde_json::from_str(raw)
            .with_context(|| format!("Invalid directive JSON: {raw}"))?;
        builder.add_directive(directive);
    }

    if args.keep_session {
        builder.should_end_session(false);
    }
    if args.end_session {
        builder.should_end_session(true);
    }
    Ok(())
}

/// Split `KEY=VALUE`. The value is parsed as JSON, falling back to a string,
/// so `--attr name=Ada` and `--attr count=3` both do what you expect.
fn parse_attribute(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Attribute '{raw}' must look like KEY=VALUE");
    };
    if key.is_empty() {
        bail!("Attribute '{raw}' has an empty key");
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn check_play_behavior(behavior: &str) {
    if let Err(err) = behavior.parse::<PlayBehavior>() {
        tracing::warn!("{err}, passing it through unchanged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use serde_json::json;

    fn parse_build(argv: &[&str]) -> BuildArgs {
        let mut full = vec!["skresp", "build"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Build(args) => args,
            _ => panic!("expected build command"),
        }
    }

    fn build_json(argv: &[&str]) -> Value {
        let args = parse_build(argv);
        let mut builder = ResponseBuilder::new();
        apply_build_args(&args, &mut builder).unwrap();
        serde_json::to_value(builder.build()).unwrap()
    }

    #[test]
    fn test_build_text_and_keep_session() {
        let value = build_json(&["--text", "hi", "--keep-session"]);
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": {"type": "PlainText", "text": "hi"},
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_build_reprompt_with_play_behavior() {
        let value = build_json(&[
            "--reprompt-ssml",
            "<speak>hello?</speak>",
            "--reprompt-play-behavior",
            "REPLACE_ENQUEUED",
        ]);
        assert_eq!(
            value["response"]["reprompt"],
            json!({
                "outputSpeech": {
                    "type": "ssml",
                    "ssml": "<speak>hello?</speak>",
                    "playBehavior": "REPLACE_ENQUEUED"
                }
            })
        );
    }

    #[test]
    fn test_build_simple_card() {
        let value = build_json(&["--card-title", "T", "--card-content", "C"]);
        assert_eq!(
            value["response"]["card"],
            json!({"type": "Simple", "title": "T", "content": "C"})
        );
    }

    #[test]
    fn test_build_standard_card() {
        let value = build_json(&[
            "--card-title",
            "T",
            "--card-text",
            "Txt",
            "--small-image-url",
            "s.png",
            "--large-image-url",
            "l.png",
        ]);
        assert_eq!(
            value["response"]["card"],
            json!({
                "title": "T",
                "text": "Txt",
                "image": {"smallImageUrl": "s.png", "largeImageUrl": "l.png"}
            })
        );
    }

    #[test]
    fn test_build_attributes_and_directives() {
        let value = build_json(&[
            "--attr",
            "name=Ada",
            "--attr",
            "count=3",
            "--attr",
            r#"prefs={"units":"metric"}"#,
            "--directive",
            r#"{"type":"Dialog.Delegate"}"#,
        ]);
        assert_eq!(
            value["sessionAttributes"],
            json!({"name": "Ada", "count": 3, "prefs": {"units": "metric"}})
        );
        assert_eq!(value["response"]["directives"], json!([{"type": "Dialog.Delegate"}]));
    }

    #[test]
    fn test_conflicting_speech_flags_rejected() {
        let result = Cli::try_parse_from(["skresp", "build", "--text", "a", "--ssml", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_end_session_overrides_config_default() {
        let config = CliConfig {
            default_should_end_session: false,
            ..Default::default()
        };

        let mut builder = seed_builder(&config);
        apply_build_args(&parse_build(&["--text", "bye"]), &mut builder).unwrap();
        assert!(!builder.build().response.should_end_session);

        let mut builder = seed_builder(&config);
        apply_build_args(&parse_build(&["--text", "bye", "--end-session"]), &mut builder).unwrap();
        assert!(builder.build().response.should_end_session);
    }

    #[test]
    fn test_keep_and_end_session_conflict() {
        let result = Cli::try_parse_from(["skresp", "build", "--keep-session", "--end-session"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_standard_card_requires_image_urls() {
        let result =
            Cli::try_parse_from(["skresp", "build", "--card-title", "T", "--card-text", "X"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "skresp",
            "build",
            "--card-title",
            "T",
            "--card-text",
            "X",
            "--small-image-url",
            "s.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_card_content_requires_title() {
        let result = Cli::try_parse_from(["skresp", "build", "--card-content", "C"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_directive_is_an_error() {
        let args = parse_build(&["--directive", "{not json"]);
        let mut builder = ResponseBuilder::new();
        let err = apply_build_args(&args, &mut builder).unwrap_err();
        assert!(err.to_string().contains("Invalid directive JSON"));
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!(parse_attribute("flag=true").unwrap(), ("flag".to_string(), json!(true)));
        assert_eq!(
            parse_attribute("greeting=a=b").unwrap(),
            ("greeting".to_string(), json!("a=b"))
        );
        assert_eq!(parse_attribute("empty=").unwrap(), ("empty".to_string(), json!("")));
        assert!(parse_attribute("novalue").is_err());
        assert!(parse_attribute("=3").is_err());
    }
}
