//! Implementation of `a11y notes`.

use std::process::ExitCode;

use crate::cli::{
    args::TemplateArgs,
    commands::shared::{Lookup, find_template},
    context::CommandContext,
    output::{print_json, render_notes},
};

/// Shows the developer notes of a template.
pub fn run(ctx: &CommandContext, cmd: &TemplateArgs) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    match find_template(&index, cmd) {
        Lookup::Found(doc) if cmd.json => print_json(doc),
        Lookup::Found(doc) => {
            print!("{}", render_notes(doc));
            ExitCode::SUCCESS
        }
        Lookup::Done(code) => code,
    }
}
