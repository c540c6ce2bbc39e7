//! Response building for voice-assistant skills.
//!
//! This crate holds the fluent [`builder::ResponseBuilder`] and the logic that
//! replays declarative templates onto it. It depends only on
//! `skill-response-types` -- never on any IO or CLI crate.

pub mod builder;
pub mod template;
