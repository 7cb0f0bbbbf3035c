//! Implementation of `a11y config`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings and the files they came from.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.files.is_empty() {
        println!("# No configuration files found; showing defaults.");
    } else {
        println!("# Config files (highest precedence first):");
        for path in &config.files {
            println!("#   {}", path.display());
        }
    }
    println!();

    match config.settings_to_toml() {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
