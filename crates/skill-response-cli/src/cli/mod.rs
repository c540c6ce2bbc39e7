//! CLI command definitions for the `skresp` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod build;
pub mod inspect;
pub mod render;
pub mod schema;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build voice-assistant skill response payloads.
#[derive(Parser)]
#[command(name = "skresp", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit compact JSON regardless of the configured `pretty` setting.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(long, global = true, env = "SKRESP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a response from command-line flags.
    Build(build::BuildArgs),

    /// Render a response from a TOML, JSON or YAML template.
    Render {
        /// Template file path.
        template: PathBuf,
    },

    /// Summarize an existing response document (`-` reads stdin).
    Inspect {
        /// Response JSON file path, or `-` for stdin.
        input: String,
    },

    /// Print the JSON schema of a response.
    Schema,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
