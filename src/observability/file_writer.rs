//! Append-only trace file with numbered backups.
//!
//! When the live file grows past the size limit it is shifted to `<file>.1`,
//! the previous `<file>.1` to `<file>.2`, and so on; the oldest backup beyond
//! the retention count is removed. Writes never fail the plugin: callers get an
//! `io::Result` and the exporter reports it as a trace error.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size and retention limits of a [`RotatingFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Live file size that triggers a rotation.
    pub max_bytes: u64,
    /// Numbered backups kept next to the live file.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Line-oriented file writer guarded by a mutex.
///
/// The handle opens lazily on the first write and is dropped on rotation.
///
/// # Rotation
///
/// Before each write the live file size is compared with
/// [`RotationPolicy::max_bytes`]. When it is reached:
///
/// 1. `<file>.N` (the oldest kept backup) is removed
/// 2. `<file>.1 .. <file>.N-1` move up by one
/// 3. The live file becomes `<file>.1` and a new one is opened
pub struct RotatingFile {
    /// Path of the live file.
    path: PathBuf,
    /// Size limit and number of backups.
    policy: RotationPolicy,
    /// Open handle, `None` until the first write and after each rotation.
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `path` without touching the filesystem.
    ///
    /// # Parameters
    ///
    /// * `path` - Live file, created on the first write
    /// * `policy` - When to rotate and how many backups to keep
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// The line is flushed before returning.
    ///
    /// # Parameters
    ///
    /// * `line` - Text to write, without its trailing newline
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or any filesystem call fails.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let full = fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.policy.max_bytes);
        if full {
            *handle = None;
            self.shift_backups()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Path of backup number `n` (1 is the newest).
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Moves every backup one number up and the live file to `.1`.
    ///
    /// With `max_backups == 0` the live file is simply removed.
    fn shift_backups(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_file(dir: &Path, max_backups: usize) -> RotatingFile {
        RotatingFile::new(
            dir.join("pau-otlp.json"),
            RotationPolicy {
                max_bytes: 8,
                max_backups,
            },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = small_file(dir.path(), 3);
        file.append_line("a").unwrap();
        file.append_line("b").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("pau-otlp.json")).unwrap(), "a\nb\n");
    }

    #[test]
    fn rotates_into_numbered_backups_and_drops_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let file = small_file(dir.path(), 2);
        for line in ["first-line", "second-line", "third-line", "fourth"] {
            file.append_line(line).unwrap();
        }

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("pau-otlp.json"), "fourth\n");
        assert_eq!(read("pau-otlp.json.1"), "third-line\n");
        assert_eq!(read("pau-otlp.json.2"), "second-line\n");
        assert!(!dir.path().join("pau-otlp.json.3").exists());
    }
}
