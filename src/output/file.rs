//! Hour-keyed file sink with single-generation size rotation.
//!
//! Layout: `<root>/Logs/<YYYY>/<MM>/<DD>/<HH>h.txt`, one `[<SS>s ] <message>` line per call.
//! When the target is at or above the size ceiling it is renamed to `<HH>h_backup.txt`
//! (replacing any earlier backup) before the new line is appended.

use super::fs::{Filesystem, OsFilesystem};
use crate::Error;
use crate::clock::Timestamp;
use crate::internal;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Directory created under the backup root.
pub const LOGS_DIR: &str = "Logs";
/// Appended to the zero-padded hour to form the file name.
pub const FILE_SUFFIX: &str = "h.txt";
/// Inserted before the extension of a rotated file.
pub const BACKUP_SUFFIX: &str = "_backup";
/// Default size ceiling: 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Serializes check-rotate-append across every sink in the process.
static PERSIST_LOCK: Mutex<()> = Mutex::new(());

/// Appends log entries to date-partitioned files under a backup root.
#[derive(Clone)]
pub struct FileSink {
    root: PathBuf,
    max_file_size: u64,
    fs: Arc<dyn Filesystem>,
}

impl fmt::Debug for FileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("root", &self.root)
            .field("max_file_size", &self.max_file_size)
            .finish_non_exhaustive()
    }
}

impl FileSink {
    /// Sink on the real filesystem.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, max_file_size: u64) -> Self {
        Self {
            root: root.into(),
            max_file_size,
            fs: Arc::new(OsFilesystem),
        }
    }

    /// Swaps the filesystem implementation.
    #[must_use]
    pub fn with_filesystem(mut self, fs: Arc<dyn Filesystem>) -> Self {
        self.fs = fs;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// `<root>/Logs/<YYYY>/<MM>/<DD>`
    #[must_use]
    pub fn dir_for(&self, ts: &Timestamp) -> PathBuf {
        self.root
            .join(LOGS_DIR)
            .join(ts.year4())
            .join(ts.month2())
            .join(ts.day2())
    }

    /// `<root>/Logs/<YYYY>/<MM>/<DD>/<HH>h.txt`
    #[must_use]
    pub fn path_for(&self, ts: &Timestamp) -> PathBuf {
        self.dir_for(ts).join(format!("{}{FILE_SUFFIX}", ts.hour2()))
    }

    /// `08h.txt` becomes `08h_backup.txt`; a name without extension just gets the suffix.
    #[must_use]
    pub fn backup_path(path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match path.extension() {
            Some(ext) => format!("{stem}{BACKUP_SUFFIX}.{}", ext.to_string_lossy()),
            None => format!("{stem}{BACKUP_SUFFIX}"),
        };
        path.with_file_name(name)
    }

    /// Only the seconds are written; hour and day come from the path.
    #[must_use]
    pub fn format_entry(message: &str, ts: &Timestamp) -> String {
        format!("[{}s ] {message}", ts.second2())
    }

    /// Appends one entry, rotating first if the target has reached the ceiling.
    /// Returns the path written to.
    ///
    /// # Errors
    /// Returns `Error::Io` if the directory cannot be created or the file cannot be rotated or written.
    pub fn try_persist(&self, message: &str, ts: &Timestamp) -> Result<PathBuf, Error> {
        let dir = self.dir_for(ts);
        self.fs.create_dir_all(&dir)?;

        let path = self.path_for(ts);
        let entry = Self::format_entry(message, ts);

        let _guard = PERSIST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(size) = self.fs.file_size(&path)?
            && size >= self.max_file_size
        {
            let backup = Self::backup_path(&path);
            self.fs.rename(&path, &backup)?;
            internal::debug(
                "FILE",
                &format!(
                    "Rotated {} ({size} bytes) to {}",
                    path.display(),
                    backup.display()
                ),
            );
        }

        internal::trace("FILE", &format!("Writing to: {}", path.display()));
        self.fs.append_line(&path, &entry)?;

        Ok(path)
    }

    /// Best-effort variant of `try_persist`: failures are reported and the line is dropped.
    /// Returns whether the line was written.
    pub fn persist(&self, message: &str, ts: &Timestamp) -> bool {
        match self.try_persist(message, ts) {
            Ok(_) => true,
            Err(e) => {
                internal::error("FILE", &format!("Log line dropped: {e}"));
                false
            }
        }
    }
}
