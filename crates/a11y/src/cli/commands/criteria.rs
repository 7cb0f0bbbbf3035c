//! Implementation of `a11y criteria`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{
    args::CriteriaCommand,
    commands::shared::{Lookup, find_template},
    context::CommandContext,
    output::{criteria_section, print_json, render_criteria},
};

/// Shows one criteria section of a template.
pub fn run(ctx: &CommandContext, cmd: &CriteriaCommand) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    let doc = match find_template(&index, &cmd.template) {
        Lookup::Found(doc) => doc,
        Lookup::Done(code) => return code,
    };

    debug!(format = %cmd.format, section = %criteria_section(&cmd.format), "criteria");
    if cmd.template.json {
        return print_json(doc);
    }
    let out = render_criteria(doc, &cmd.format);
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
    ExitCode::SUCCESS
}
