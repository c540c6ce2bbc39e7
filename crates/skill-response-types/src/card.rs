//! Companion-app card types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CardType {
    Simple,
    Standard,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Simple => write!(f, "Simple"),
            CardType::Standard => write!(f, "Standard"),
        }
    }
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(CardType::Simple),
            "standard" => Ok(CardType::Standard),
            other => Err(format!("invalid card type: '{other}'")),
        }
    }
}

/// Image pair shown on a standard card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub small_image_url: String,
    pub large_image_url: String,
}

impl Image {
    pub fn new(small_image_url: impl Into<String>, large_image_url: impl Into<String>) -> Self {
        Self {
            small_image_url: small_image_url.into(),
            large_image_url: large_image_url.into(),
        }
    }
}

/// A visual card shown in the companion app.
///
/// Simple cards carry `content`; standard cards carry `text` and an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Card {
    /// A `Simple` card: title and content, never an image.
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            card_type: Some(CardType::Simple),
            title: title.into(),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// A standard card: title, text and image.
    ///
    /// The type tag is left unset. `CardType::Standard` is only emitted when a
    /// caller sets it explicitly.
    pub fn standard(title: impl Into<String>, text: impl Into<String>, image: Image) -> Self {
        Self {
            card_type: None,
            title: title.into(),
            content: None,
            text: Some(text.into()),
            image: Some(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_card_shape() {
        let card = Card::simple("T", "C");
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({"type": "Simple", "title": "T", "content": "C"})
        );
    }

    #[test]
    fn test_standard_card_has_no_type_tag() {
        let card = Card::standard("T", "Txt", Image::new("s.png", "l.png"));
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "title": "T",
                "text": "Txt",
                "image": {"smallImageUrl": "s.png", "largeImageUrl": "l.png"}
            })
        );
    }

    #[test]
    fn test_explicit_standard_tag_is_emitted() {
        let card = Card {
            card_type: Some(CardType::Standard),
            ..Card::standard("T", "Txt", Image::default())
        };
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["type"], "Standard");
    }

    #[test]
    fn test_card_deserialize_minimal() {
        let card: Card = serde_json::from_value(json!({"title": "Weather"})).unwrap();
        assert_eq!(card.title, "Weather");
        assert!(card.card_type.is_none());
        assert!(card.image.is_none());
    }

    #[test]
    fn test_card_type_parse() {
        assert_eq!("simple".parse::<CardType>().unwrap(), CardType::Simple);
        assert_eq!("Standard".parse::<CardType>().unwrap(), CardType::Standard);
        assert!("LinkAccount".parse::<CardType>().is_err());
        assert_eq!(CardType::Standard.to_string(), "Standard");
    }
}
