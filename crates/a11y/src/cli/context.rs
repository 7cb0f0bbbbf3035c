//! Shared context for running CLI commands.

use std::{
    env, fmt,
    path::{Path, PathBuf},
    process::ExitCode,
};

use a11y_config::Config;
use a11y_index::{Catalog, ContentIndex, IndexError, build_catalog};
use tracing::{debug, info};

use crate::cli::args::SourceArgs;

/// Where the content index is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A markdown documentation tree, indexed at startup.
    Docs(PathBuf),
    /// A prebuilt JSON content file.
    Content(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Docs(path) => write!(f, "documentation tree {}", path.display()),
            Self::Content(path) => write!(f, "content file {}", path.display()),
        }
    }
}

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Source overrides from the command line.
    source_args: SourceArgs,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(source_args: SourceArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            source_args,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            source_args: SourceArgs::default(),
        })
    }

    /// Picks the content source: `--docs`, then `--content`, then the configuration.
    pub fn content_source(&self) -> Option<ContentSource> {
        let args = &self.source_args;
        let settings = &self.config.source;

        if let Some(docs) = &args.docs {
            Some(ContentSource::Docs(self.cwd.join(docs)))
        } else if let Some(content) = &args.content {
            Some(ContentSource::Content(self.cwd.join(content)))
        } else if let Some(docs) = &settings.docs {
            Some(ContentSource::Docs(docs.clone()))
        } else {
            settings.content.clone().map(ContentSource::Content)
        }
    }

    /// Returns the documentation tree to build from, ignoring content files.
    pub fn docs_dir(&self) -> Option<PathBuf> {
        match &self.source_args.docs {
            Some(docs) => Some(self.cwd.join(docs)),
            None => self.config.source.docs.clone(),
        }
    }

    /// Builds a catalog from a documentation tree using the configured categories.
    pub fn build_catalog(&self, docs: &Path) -> Result<Catalog, IndexError> {
        build_catalog(docs, &self.config.source.categories)
    }

    /// Loads the content index, reporting failures on stderr.
    ///
    /// Commands never answer from an empty index: a missing or unreadable source is an error.
    pub fn index(&self) -> Result<ContentIndex, ExitCode> {
        let Some(source) = self.content_source() else {
            eprintln!("error: no content source configured");
            eprintln!(
                "Pass --docs or --content, or run 'a11y init' to create a configuration file."
            );
            return Err(ExitCode::FAILURE);
        };

        info!(%source, "loading content");
        let catalog = match &source {
            ContentSource::Docs(docs) => self.build_catalog(docs),
            ContentSource::Content(path) => Catalog::read_json(path),
        };

        let mut index = ContentIndex::new();
        catalog
            .and_then(|catalog| index.load(catalog))
            .map_err(|e| {
                eprintln!("error: failed to load content from {source}: {e}");
                ExitCode::FAILURE
            })?;

        debug!(categories = ?index.catalog().map(|c| c.len()).ok(), "content loaded");
        Ok(index)
    }

    /// Describes the active content source for display.
    pub fn source_description(&self) -> String {
        self.content_source()
            .map_or_else(|| String::from("(none)"), |source| source.to_string())
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(source_args: SourceArgs, config: Config) -> CommandContext {
        CommandContext {
            cwd: PathBuf::from("/work"),
            config,
            source_args,
        }
    }

    fn configured() -> Config {
        let mut config = Config::default();
        config.source.docs = Some(PathBuf::from("/cfg/docs"));
        config.source.content = Some(PathBuf::from("/cfg/content.json"));
        config
    }

    #[test]
    fn test_docs_flag_wins_over_content_flag() {
        let ctx = context(
            SourceArgs {
                docs: Some(PathBuf::from("docs")),
                content: Some(PathBuf::from("content.json")),
            },
            configured(),
        );

        assert_eq!(
            ctx.content_source(),
            Some(ContentSource::Docs(PathBuf::from("/work/docs")))
        );
    }

    #[test]
    fn test_content_flag_wins_over_config() {
        let ctx = context(
            SourceArgs {
                docs: None,
                content: Some(PathBuf::from("/abs/content.json")),
            },
            configured(),
        );

        assert_eq!(
            ctx.content_source(),
            Some(ContentSource::Content(PathBuf::from("/abs/content.json")))
        );
        assert_eq!(ctx.docs_dir(), Some(PathBuf::from("/cfg/docs")));
    }

    #[test]
    fn test_config_docs_before_config_content() {
        let ctx = context(SourceArgs::default(), configured());

        assert_eq!(
            ctx.content_source(),
            Some(ContentSource::Docs(PathBuf::from("/cfg/docs")))
        );
    }

    #[test]
    fn test_no_source() {
        let ctx = context(SourceArgs::default(), Config::default());

        assert!(ctx.content_source().is_none());
        assert_eq!(ctx.source_description(), "(none)");
        assert!(ctx.index().is_err());
    }
}
