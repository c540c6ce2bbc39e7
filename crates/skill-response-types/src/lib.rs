//! Response schema types for voice-assistant skills.
//!
//! This crate models the JSON document a skill returns to the assistant:
//! the [`response::Response`] envelope, its body, output speech, cards and
//! reprompts, plus the declarative template and CLI config shapes.
//!
//! Zero IO dependencies -- only serde, schemars, thiserror and the template
//! format parsers.

pub mod card;
pub mod config;
pub mod error;
pub mod response;
pub mod speech;
pub mod template;
