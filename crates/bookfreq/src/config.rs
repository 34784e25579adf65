use std::path::{Path, PathBuf};

use bookfreq_fetch::FetchOptions;

/// The book every run downloads.
pub const BOOK_URL: &str = "http://www.gutenberg.org/files/2600/2600-0.txt";

pub const ALL_WORDS_FILE: &str = "AllGroupedWords.txt";
pub const TOP_BY_COUNT_FILE: &str = "50WordsOrderedByCount.txt";
pub const TOP_BY_LENGTH_FILE: &str = "50WordsOrderedByLength.txt";
pub const ERROR_LOG_FILE: &str = "ErrorLog.txt";

/// Resolved runtime settings.
///
/// The source URL and report thresholds are fixed; only where output goes
/// and how the network is treated can be changed.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub fetch:      FetchOptions,
    pub progress:   bool,
    pub debug:      bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            fetch:      FetchOptions::default(),
            progress:   true,
            debug:      false,
        }
    }
}

impl AppConfig {
    pub fn output_path(&self, file_name: &str) -> PathBuf { self.output_dir.join(file_name) }

    pub fn error_log_path(&self) -> PathBuf { self.output_path(ERROR_LOG_FILE) }

    pub fn output_dir(&self) -> &Path { &self.output_dir }
}
