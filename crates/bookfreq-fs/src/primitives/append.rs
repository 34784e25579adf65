use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Error, Result};

/// Append each item of `lines` to `path` followed by `\n`.
///
/// The file is created if absent. Existing content is never truncated, so
/// repeated calls accumulate lines. Returns the number of lines written.
pub fn append_lines<I>(path: impl AsRef<Path>, lines: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    let mut writer = BufWriter::new(file);

    let mut written = 0usize;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(to_error)?;
        writer.write_all(b"\n").map_err(to_error)?;
        written += 1;
    }
    writer.flush().map_err(to_error)?;

    Ok(written)
}
