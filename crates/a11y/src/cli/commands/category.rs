//! Implementation of `a11y category`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::render_category};

/// Shows the structure of one category.
///
/// An unknown category prints the available ones and still succeeds.
pub fn run(ctx: &CommandContext, category: &str) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    match index.catalog() {
        Ok(catalog) => {
            print!("{}", render_category(catalog, category));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
