//! Append-only line writer with size-based rotation.
//!
//! Before each write the current file size is checked. Past the limit the file
//! is renamed to `<name>.<UTC timestamp>` and a fresh file is started; only the
//! newest backups are kept.

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, write or flush errors, or a poisoned lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::other("No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_prefix(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::other("Invalid file name"))
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
        let backup_path = self
            .file_path
            .with_file_name(format!("{}{timestamp}", self.backup_prefix()?));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes all but the newest `max_backups` backups.
    ///
    /// Timestamps sort lexically, so names order the backups by age.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::other("No parent directory"))?;
        let prefix = self.backup_prefix()?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &std::path::Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok()?.file_name().into_string().ok())
            .filter(|name| name.starts_with("trace.json."))
            .collect()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(backups(dir.path()).is_empty());
    }

    #[test]
    fn rotates_past_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            writer.write_line(&format!("line number {i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 5\n");
        assert_eq!(backups(dir.path()).len(), 2);
    }
}
