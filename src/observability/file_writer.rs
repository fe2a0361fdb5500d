//! Rotating log file used as the `tracing-subscriber` fmt writer.
//!
//! The log grows until it passes a size threshold, then shifts into numbered
//! backups: `zelect.log` → `zelect.log.1` → `zelect.log.2` …, dropping
//! whatever falls off the end of the retention window.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated append-only log file.
///
/// The file is opened lazily on the first write. Access is serialized through
/// an internal `Mutex`, so one instance can back a global subscriber.
///
/// # Example
///
/// ```rust,no_run
/// use zelect::observability::RotatingLog;
///
/// let log = RotatingLog::new("/tmp/zelect.log");
/// let subscriber = tracing_subscriber::fmt().with_writer(log).finish();
/// ```
pub struct RotatingLog {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingLog {
    /// Creates a writer for `path` with the default limits (10 MB, 3 backups).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|e| io::Error::other(format!("log mutex poisoned: {e}")))
    }

    /// Appends `buf`, rotating first if the file is over the limit.
    fn append(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;

        self.check_and_rotate(&mut file)?;

        let handle = match file.as_mut() {
            Some(handle) => handle,
            None => file.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            ),
        };

        handle.write_all(buf)?;
        Ok(buf.len())
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        let size = fs::metadata(&self.path).map(|meta| meta.len()).unwrap_or(0);
        if size > self.max_bytes {
            *file = None;
            self.rotate_files()?;
        }
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts every backup up by one and moves the live file to `.1`.
    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

impl Write for &RotatingLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.lock()?.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RotatingLog {
    type Writer = &'a RotatingLog;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for RotatingLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingLog")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
