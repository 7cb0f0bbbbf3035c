//! Implementation of `a11y categories`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::render_categories};

/// Lists categories with template counts.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    match index.catalog() {
        Ok(catalog) => {
            print!("{}", render_categories(catalog));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
