//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so paths
//! from the user's configuration have to be rebased before use.

use std::path::PathBuf;

/// Directory holding the trace file.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("pau")
}

/// Rebases `~` and `~/...` onto the sandbox host mount.
///
/// # Example
///
/// ```rust
/// use pau::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/pau/catalog.json"), "/host/pau/catalog.json");
/// assert_eq!(expand_tilde("/etc/catalog.json"), "/etc/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
