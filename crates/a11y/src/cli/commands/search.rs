//! Implementation of `a11y search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_search_json, render_search},
};

/// Finds templates whose name or label contains the query.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    let matches = match index.search(&cmd.query, cmd.category.as_deref()) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_search_json(&cmd.query, &matches);
    }
    print!("{}", render_search(&cmd.query, &matches));
    ExitCode::SUCCESS
}
