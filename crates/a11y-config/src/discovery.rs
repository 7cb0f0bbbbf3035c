//! Configuration file discovery.
//!
//! Finds `.a11y.toml` files between the working directory and the filesystem root, with
//! `~/.a11y.toml` as the lowest-precedence fallback.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".a11y.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, `~/.a11y.toml` last. Walking
/// stops at the first file with `root = true`, and the global file is then skipped too.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    for dir in cwd.ancestors() {
        let config_path = dir.join(CONFIG_FILENAME);
        if !config_path.is_file() {
            continue;
        }
        let is_root = is_root_config(&config_path);
        configs.push(config_path);
        if is_root {
            found_root = true;
            break;
        }
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.a11y.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Discovered configs with the global file filtered out.
    fn local_configs(cwd: &Path) -> Vec<PathBuf> {
        discover_config_files(cwd)
            .into_iter()
            .filter(|p| !is_global_config(p))
            .collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        assert!(local_configs(&subdir).is_empty());
    }

    #[test]
    fn test_discover_closest_first() {
        let test_dir = TestDir::new();
        let outer = test_dir.create_config("");
        let inner = test_dir.create_config("project/docs");
        let cwd = test_dir.create_dir("project/docs/web");

        assert_eq!(local_configs(&cwd), vec![inner, outer]);
    }

    #[test]
    fn test_discover_from_directory_with_config() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config("");

        assert_eq!(local_configs(test_dir.path()), vec![config]);
    }

    #[test]
    fn test_discover_skips_directory_named_like_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        assert!(local_configs(&subdir).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let test_dir = TestDir::new();
        test_dir.create_config("");
        let child = test_dir.create_config("project/sub");
        let root = test_dir.create_root_config("project");
        let cwd = test_dir.create_dir("project/sub/deep");

        // The global config is excluded as well, so no filtering here.
        assert_eq!(discover_config_files(&cwd), vec![child, root]);
    }

    #[test]
    fn test_root_false_does_not_stop_discovery() {
        let test_dir = TestDir::new();
        let outer = test_dir.create_config("");
        let mid = test_dir.create_config_with_content("project", "root = false\n");
        let cwd = test_dir.create_dir("project/src");

        assert_eq!(local_configs(&cwd), vec![mid, outer]);
    }

    #[test]
    fn test_unparseable_config_is_not_root() {
        let test_dir = TestDir::new();
        let outer = test_dir.create_config("");
        let broken = test_dir.create_config_with_content("project", "root = [\n");

        assert_eq!(local_configs(&test_dir.path().join("project")), vec![broken, outer]);
    }

    #[test]
    fn test_global_config_path() {
        let path = global_config_path();
        assert!(path.is_some_and(|p| p.ends_with(CONFIG_FILENAME)));
        assert!(!is_global_config(Path::new("/some/other/path/.a11y.toml")));
    }
}
