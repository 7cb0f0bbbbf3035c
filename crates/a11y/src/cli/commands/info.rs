//! Implementation of `a11y info`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::render_info};

/// Shows version, data source and totals.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    match index.catalog() {
        Ok(catalog) => {
            print!("{}", render_info(catalog, &ctx.source_description()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
