//! Logging setup for skill-response binaries.

pub mod tracing_setup;
