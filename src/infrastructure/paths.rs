//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Directory holding the trace file.
///
/// `/host` is the cwd of the last focused terminal (usually the home
/// directory), so this is typically `~/.local/share/zellij/book-finder`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("book-finder")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option.
///
/// ```
/// use book_finder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
