use std::fmt::Display;
use std::path::Path;

use tracing::debug;

use crate::primitives::{AtomicWriteOptions, append_lines, atomic_write};
use crate::{Error, Result};

/// Create `dir` and its parents if they do not exist yet.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Append one line per entry, rendered with its `Display` impl.
///
/// Report files are append-only: running twice leaves both runs' lines in
/// the file.
pub fn write_report<I>(path: impl AsRef<Path>, entries: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Display,
{
    let path = path.as_ref();
    let lines = entries.into_iter().map(|entry| entry.to_string());
    let written = append_lines(path, lines)?;
    debug!(path = %path.display(), lines = written, "report appended");
    Ok(written)
}

/// Replace the error log at `path` with `message`.
pub fn write_error_log(path: impl AsRef<Path>, message: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    atomic_write(path, message.as_bytes(), AtomicWriteOptions::new().sync(true))
}
