use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bookfreq_fetch::{HttpClient, TextFetcher};
use bookfreq_fs::{ensure_dir, write_error_log, write_report};
use bookfreq_words::Analysis;
use tracing::{error, info};

use crate::config::{ALL_WORDS_FILE, TOP_BY_COUNT_FILE, TOP_BY_LENGTH_FILE};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub elapsed:        Duration,
    pub bytes:          usize,
    pub total_tokens:   usize,
    pub distinct_words: usize,
}

/// Fetch `url`, analyse it, and append the three reports under `output_dir`.
///
/// Any failure stops the run; reports already written stay on disk.
pub async fn run<C: HttpClient>(
    fetcher: &TextFetcher<C>,
    url: &str,
    output_dir: &Path,
) -> Result<RunSummary> {
    let started = Instant::now();

    ensure_dir(output_dir).context("cannot prepare output directory")?;

    let text = fetcher
        .fetch_text(url)
        .await
        .with_context(|| format!("failed to download {url}"))?;
    info!(bytes = text.len(), "book downloaded");

    let analysis = Analysis::from_text(&text);
    info!(
        tokens = analysis.total_tokens(),
        distinct = analysis.distinct_words(),
        "words grouped"
    );

    write_reports(output_dir, &analysis)?;

    Ok(RunSummary {
        elapsed:        started.elapsed(),
        bytes:          text.len(),
        total_tokens:   analysis.total_tokens(),
        distinct_words: analysis.distinct_words(),
    })
}

/// Append the full list, the count ranking, and the length ranking.
pub fn write_reports(output_dir: &Path, analysis: &Analysis) -> Result<()> {
    let path = output_dir.join(ALL_WORDS_FILE);
    write_report(&path, analysis.all()).context("cannot write grouped words report")?;

    let path = output_dir.join(TOP_BY_COUNT_FILE);
    write_report(&path, analysis.top_by_count()).context("cannot write count report")?;

    let path = output_dir.join(TOP_BY_LENGTH_FILE);
    write_report(&path, analysis.top_by_length()).context("cannot write length report")?;

    info!(dir = %output_dir.display(), "reports written");
    Ok(())
}

/// Replace the error log with the full message chain of `err`.
///
/// Falls back to stderr when the log itself cannot be written.
pub fn record_failure(error_log: &Path, err: &anyhow::Error) {
    let message = format!("{err:#}");
    error!(error = %message, "run failed");

    if let Err(log_err) = write_error_log(error_log, &message) {
        eprintln!("{message}");
        eprintln!("additionally, {log_err}");
    }
}

/// Render a duration as `hh:mm:ss.fffffff`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let ticks = elapsed.subsec_nanos() / 100;
    format!(
        "{:02}:{:02}:{:02}.{:07}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        ticks
    )
}
