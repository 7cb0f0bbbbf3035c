//! Implementation of `a11y build`.

use std::process::ExitCode;

use crate::cli::{args::BuildCommand, context::CommandContext};

/// Builds a JSON content file from the documentation tree.
pub fn run(ctx: &CommandContext, cmd: &BuildCommand) -> ExitCode {
    let Some(docs) = ctx.docs_dir() else {
        eprintln!("error: no documentation tree configured");
        eprintln!("Pass --docs or set `docs` under [source] in .a11y.toml.");
        return ExitCode::FAILURE;
    };

    println!("Processing documentation from: {}", docs.display());
    let catalog = match ctx.build_catalog(&docs) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = ctx.cwd.join(&cmd.output);
    if let Err(e) = catalog.write_json(&output) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!();
    println!("Content data generated: {}", output.display());
    println!("  Categories: {}", catalog.len());
    for category in catalog.iter() {
        println!("  - {}: {} items", category.key, category.nodes.len());
    }
    ExitCode::SUCCESS
}
