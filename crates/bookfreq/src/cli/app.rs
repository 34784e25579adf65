use std::path::PathBuf;
use std::time::Duration;

use bookfreq_fetch::FetchOptions;
use clap::Parser;

use crate::config::AppConfig;

/// Download War and Peace and write word-frequency reports.
#[derive(Clone, Debug, Parser)]
#[command(name = "bookfreq", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Directory for the report files and ErrorLog.txt
    #[arg(short, long, env = "BOOKFREQ_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Seconds allowed to establish the connection
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub connect_timeout: u64,

    /// Seconds allowed for the whole download
    #[arg(long, value_name = "SECS", default_value_t = 120)]
    pub timeout: u64,

    /// Retries after the first attempt for transient failures
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub retries: u32,

    /// Base delay between retries, doubled on each attempt
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub retry_backoff_ms: u64,

    /// Do not draw a download progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub debug: bool,
}

impl From<App> for AppConfig {
    fn from(app: App) -> Self {
        let fetch = FetchOptions::default()
            .connect_timeout(Duration::from_secs(app.connect_timeout))
            .timeout(Duration::from_secs(app.timeout))
            .max_retries(app.retries)
            .retry_backoff(Duration::from_millis(app.retry_backoff_ms));

        AppConfig {
            output_dir: app.output_dir,
            fetch,
            progress: !app.no_progress,
            debug: app.debug,
        }
    }
}
