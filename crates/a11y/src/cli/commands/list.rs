//! Implementation of `a11y list`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::render_list};

/// Lists every template, grouped by category.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    match index.catalog() {
        Ok(catalog) => {
            print!("{}", render_list(catalog));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
