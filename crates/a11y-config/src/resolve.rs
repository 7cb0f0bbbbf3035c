//! Path resolution for source settings.
//!
//! Config files name their docs tree and content file with paths that may be relative or
//! tilde-prefixed. These are resolved against the directory of the file that set them.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/docs`) - expanded to home directory
/// - Relative paths (`./docs`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths (`/srv/docs`) - returned as-is
///
/// The path is not required to exist: a content file may not have been built yet.
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./data/content.json", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/./data/content.json"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_path("docs", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved = resolve_path("../shared/docs", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/../shared/docs"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/srv/docs", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_resolve_missing_path_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let resolved = resolve_path("not-built-yet.json", temp.path()).unwrap();
        assert!(!resolved.exists());
        assert_eq!(resolved, temp.path().join("not-built-yet.json"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let Ok(home) = home_dir() else {
            return;
        };

        assert_eq!(resolve_path("~", Path::new("/other")).unwrap(), home);
        assert_eq!(
            resolve_path("~/docs/a11y", Path::new("/other")).unwrap(),
            home.join("docs/a11y")
        );
    }

    #[test]
    fn test_tilde_only_expands_as_prefix() {
        let resolved = resolve_path("docs/~backup", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/docs/~backup"));
    }
}
