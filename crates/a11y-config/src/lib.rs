//! Configuration system for a11y.
//!
//! a11y reads TOML files named `.a11y.toml`. Configuration is resolved by walking up the
//! directory tree from the current working directory, collecting any `.a11y.toml` files
//! found, then loading `~/.a11y.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [source]
//! docs = "data/magentaA11y/public/content/documentation"
//! content = "data/content.json"
//! categories = ["web", "native", "how-to-test"]
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawSource, parse_config_file, parse_config_str};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::config_template;

/// Categories indexed when no config names any.
pub const DEFAULT_CATEGORIES: &[&str] = &["web", "native", "how-to-test"];

/// Top-level merged configuration for a11y.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.a11y.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where documentation content comes from.
    pub source: SourceSettings,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.a11y.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.a11y.toml` file, with paths already resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            source: &self.source,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Documentation source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSettings {
    /// Documentation tree to build the index from, one subdirectory per category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<PathBuf>,
    /// Prebuilt JSON content file, used when no docs tree is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
    /// Categories to index, in order.
    pub categories: Vec<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            docs: None,
            content: None,
            categories: DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Borrowed view of the settings in `.a11y.toml` layout.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// The `[source]` table.
    source: &'a SourceSettings,
}
