//! Path utilities for data storage and user-supplied paths.
//!
//! Resolves the platform data directory (where trace files are written) and
//! expands `~` in configured paths.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Fallback data directory used when no home directory can be determined.
const FALLBACK_DATA_DIR: &str = ".podcast-browser";

/// Returns the data directory for podcast browser files.
///
/// Uses the platform convention (`~/.local/share/podcast-browser` on Linux,
/// `~/Library/Application Support/podcast-browser` on macOS), falling back to
/// `./.podcast-browser` when no home directory is available.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "podcast-browser").map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use podcast_browser::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative/catalog.json"), PathBuf::from("relative/catalog.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    expand_tilde_with(path, home)
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_home_prefix() {
        let home = Some(PathBuf::from("/home/listener"));
        assert_eq!(expand_tilde_with("~", home.clone()), PathBuf::from("/home/listener"));
        assert_eq!(
            expand_tilde_with("~/podcasts/catalog.json", home.clone()),
            PathBuf::from("/home/listener/podcasts/catalog.json")
        );
        assert_eq!(expand_tilde_with("~other/x", home), PathBuf::from("~other/x"));
    }

    #[test]
    fn leaves_paths_alone_without_home() {
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn data_dir_mentions_app_name() {
        let dir = get_data_dir();
        assert!(dir.to_string_lossy().contains("podcast-browser"), "unexpected data dir {dir:?}");
    }
}
