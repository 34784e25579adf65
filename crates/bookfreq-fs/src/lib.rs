//! Report and error-log file output.
//!
//! Reports are append-only line files; the error log is replaced
//! atomically so a reader never sees a half-written message.

mod error;
mod primitives;
mod report;

pub use error::{Error, Result};
pub use primitives::{AtomicWriteOptions, append_lines, atomic_read, atomic_write};
pub use report::{ensure_dir, write_error_log, write_report};
