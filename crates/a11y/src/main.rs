//! Command-line interface for browsing MagentaA11y accessibility documentation.
//!
//! Templates are markdown documents grouped by category (`web`, `native`, `how-to-test`).
//! The index is built from a documentation tree or loaded from a prebuilt JSON content file,
//! then queried by subcommand.

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "A11Y_LOG";

/// Installs the stderr log subscriber. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(cli.source),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
