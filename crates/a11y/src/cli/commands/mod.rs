//! Command implementations and dispatch.

pub mod build;
pub mod categories;
pub mod category;
pub mod config;
pub mod criteria;
pub mod get;
pub mod info;
pub mod init;
pub mod list;
pub mod notes;
pub mod search;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::List => list::run(ctx),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Category { category } => category::run(ctx, &category),
        Commands::Notes(cmd) => notes::run(ctx, &cmd),
        Commands::Criteria(cmd) => criteria::run(ctx, &cmd),
        Commands::Categories => categories::run(ctx),
        Commands::Info => info::run(ctx),
        Commands::Build(cmd) => build::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
