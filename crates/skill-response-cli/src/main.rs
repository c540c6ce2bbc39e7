//! skill-response CLI entry point.
//!
//! Binary name: `skresp`
//!
//! Parses CLI arguments, loads the optional config file, then dispatches to
//! the command handler. Responses go to stdout; logs go to stderr.

mod cli;
mod config;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use skill_response_observe::tracing_setup::{filter_for_verbosity, init_tracing};

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(filter_for_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    let config = config::resolve_cli_config(cli.config.as_deref());
    let pretty = config.pretty && !cli.compact;

    match cli.command {
        Commands::Build(args) => cli::build::run(&args, &config, pretty),
        Commands::Render { template } => cli::render::run(&template, &config, pretty),
        Commands::Inspect { input } => cli::inspect::run(&input, cli.json, pretty),
        Commands::Schema => cli::schema::run(pretty),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "skresp", &mut std::io::stdout());
            Ok(())
        }
    }
}
