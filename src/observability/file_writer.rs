//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is the sink behind the `fmt` layer installed by
//! [`init_tracing`](super::init_tracing). It implements
//! [`MakeWriter`](tracing_subscriber::fmt::MakeWriter), so every formatted
//! event is handed to it as one write.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Size-rotating log file writer.
///
/// Before each write the current file size is checked. Past the limit the file
/// is renamed to `<name>.<unix_nanos>` and a fresh file is started; backups
/// beyond the retention count are deleted, oldest first.
///
/// The file handle is opened lazily and guarded by a `Mutex`, because
/// `MakeWriter` implementations must be `Sync`.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes` to the file, rotating first if it has grown too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors while rotating, opening or writing, and when
    /// the lock was poisoned by a panicking writer.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

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
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()
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

    fn rotate_files(&self) -> io::Result<()> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        // suffixes must keep increasing even when the clock is coarse
        let timestamp = self
            .backups()?
            .first()
            .and_then(|newest| self.backup_suffix(newest))
            .map_or(now, |newest| now.max(newest + 1));

        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{timestamp}"));
        let backup_path = PathBuf::from(name);

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Parses the numeric rotation suffix of a backup path.
    fn backup_suffix(&self, path: &Path) -> Option<u128> {
        let base = self.file_path.file_name()?.to_str()?;
        path.file_name()?
            .to_str()?
            .strip_prefix(base)?
            .strip_prefix('.')
            .filter(|suffix| !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()))?
            .parse()
            .ok()
    }

    /// Lists backup files, newest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let mut backups: Vec<(u128, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter_map(|path| self.backup_suffix(&path).map(|suffix| (suffix, path)))
            .collect();

        backups.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(backups.into_iter().map(|(_, path)| path).collect())
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        for old_backup in self.backups()?.iter().skip(self.max_backups) {
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
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Per-event handle returned by [`FileWriter::make_writer`].
pub struct FileWriterHandle<'a> {
    inner: &'a FileWriter,
}

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle { inner: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("zcalc.log"));

        writer.write_bytes(b"one\n").unwrap();
        writer.make_writer().write_all(b"two\n").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn rotates_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("zcalc.log"), 8, 2);

        for i in 0..6 {
            writer.write_bytes(format!("line number {i}\n").as_bytes()).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);

        let current = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(current, "line number 5\n");

        let newest_backup = fs::read_to_string(&backups[0]).unwrap();
        assert_eq!(newest_backup, "line number 4\n");
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zcalc.log.old"), "x").unwrap();
        fs::write(dir.path().join("other.log.123"), "x").unwrap();

        let writer = FileWriter::new(dir.path().join("zcalc.log"));
        assert!(writer.backups().unwrap().is_empty());
    }
}
