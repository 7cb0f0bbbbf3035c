//! Clap argument definitions for the `a11y` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "a11y", version)]
#[command(about = "Accessibility issue templates and test criteria from MagentaA11y")]
pub struct Cli {
    /// Where to load content from.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Content source overrides. Without either flag, `.a11y.toml` decides.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Build the index from a documentation tree (one subdirectory per category)
    #[arg(long, global = true, value_name = "DIR")]
    pub docs: Option<PathBuf>,

    /// Load a prebuilt JSON content file
    #[arg(long, global = true, value_name = "FILE")]
    pub content: Option<PathBuf>,
}

/// Arguments naming one template.
#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Category, e.g. web, native, how-to-test
    pub category: String,

    /// Template name, e.g. button or alert-notification
    pub name: String,

    /// Output the template as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `a11y search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Text to look for in template names and labels
    pub query: String,

    /// Only search this category
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Output matches as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `a11y criteria`.
#[derive(Args, Debug, Clone)]
pub struct CriteriaCommand {
    /// Template to read.
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Criteria format: condensed, gherkin, or general
    #[arg(short = 'f', long, default_value = "condensed")]
    pub format: String,
}

/// Arguments for `a11y build`.
#[derive(Args, Debug, Clone)]
pub struct BuildCommand {
    /// Where to write the JSON content file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: PathBuf,
}

/// Arguments for `a11y init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.a11y.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `a11y` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List every template, grouped by category
    List,

    /// Show a template with all of its sections
    Get(TemplateArgs),

    /// Find templates by name or label
    #[command(after_help = "\
EXAMPLES:
  a11y search button
  a11y search 'text input' -c web
  a11y search '' -c native        List every native template")]
    Search(SearchCommand),

    /// Show the structure of one category
    Category {
        /// Category name
        category: String,
    },

    /// Show the developer notes of a template
    Notes(TemplateArgs),

    /// Show the test criteria of a template
    Criteria(CriteriaCommand),

    /// List categories with template counts
    Categories,

    /// Show version, data source and totals
    Info,

    /// Build a JSON content file from a documentation tree
    Build(BuildCommand),

    /// Initialize a11y configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
