//! Implementation of `a11y get`.

use std::process::ExitCode;

use crate::cli::{
    args::TemplateArgs,
    commands::shared::{Lookup, find_template},
    context::CommandContext,
    output::{print_json, render_document},
};

/// Shows a template with every section it has.
pub fn run(ctx: &CommandContext, cmd: &TemplateArgs) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    let doc = match find_template(&index, cmd) {
        Lookup::Found(doc) => doc,
        Lookup::Done(code) => return code,
    };

    if cmd.json {
        return print_json(doc);
    }
    print!("{}", render_document(doc, &cmd.category));
    ExitCode::SUCCESS
}
