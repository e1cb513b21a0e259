//! The four filesystem primitives the sink needs, behind a trait so failures can be injected.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Filesystem capabilities used by `FileSink`.
pub trait Filesystem: Send + Sync {
    /// Creates the directory and every missing parent; an existing directory is not an error.
    ///
    /// # Errors
    /// Any I/O failure from the platform.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Size in bytes, or `None` if the file does not exist.
    ///
    /// # Errors
    /// Any I/O failure other than "not found".
    fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Moves `from` onto `to`, replacing `to` if present.
    ///
    /// # Errors
    /// Any I/O failure from the platform.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Appends `line` plus `\n` in a single write, creating the file if needed.
    ///
    /// # Errors
    /// Any I/O failure from the platform.
    fn append_line(&self, path: &Path, line: &str) -> io::Result<()>;
}

/// `std::fs` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn append_line(&self, path: &Path, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        file.write_all(content.as_bytes())
    }
}
