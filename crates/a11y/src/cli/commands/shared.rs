//! Helpers shared by the template commands.

use std::process::ExitCode;

use a11y_document::DocumentNode;
use a11y_index::ContentIndex;

use crate::cli::{args::TemplateArgs, output::template_not_found};

/// Outcome of looking up the template named on the command line.
pub enum Lookup<'a> {
    /// The template exists.
    Found(&'a DocumentNode),
    /// Nothing to render: the not-found message was printed or a failure reported.
    Done(ExitCode),
}

/// Finds the template, printing the not-found message when it is missing.
///
/// A missing template is a normal outcome and exits successfully.
pub fn find_template<'a>(index: &'a ContentIndex, args: &TemplateArgs) -> Lookup<'a> {
    match index.find(&args.category, &args.name) {
        Ok(Some(doc)) => Lookup::Found(doc),
        Ok(None) => {
            print!("{}", template_not_found(&args.name, &args.category));
            Lookup::Done(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Lookup::Done(ExitCode::FAILURE)
        }
    }
}
