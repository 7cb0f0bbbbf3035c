//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths against the file that set them.

use std::path::{Path, PathBuf};

use crate::{Config, ConfigError, SourceSettings, parse::RawConfig, resolve::resolve_path};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this file resolve against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every field the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut source = SourceSettings::default();

    // Lowest precedence first so closer files overwrite
    for parsed in configs.iter().rev() {
        let Some(ref raw) = parsed.config.source else {
            continue;
        };
        if let Some(ref docs) = raw.docs {
            source.docs = Some(resolve_path(docs, parsed.dir())?);
        }
        if let Some(ref content) = raw.content {
            source.content = Some(resolve_path(content, parsed.dir())?);
        }
        if let Some(ref categories) = raw.categories {
            source.categories = categories.clone();
        }
    }

    Ok(Config {
        source,
        files: configs.iter().map(|c| c.path.clone()).collect(),
    })
}
