use std::process::ExitCode;

use anyhow::{Context, Result};
use bookfreq::cli::App;
use bookfreq::config::{AppConfig, BOOK_URL};
use bookfreq::logging::setup_logging;
use bookfreq::pipeline::{self, RunSummary};
use bookfreq::ui::DownloadTrackerBuilder;
use bookfreq_fetch::{ReqwestClient, TextFetcher};
use clap::Parser;
use tracing::info;

fn main() -> ExitCode {
    let config = AppConfig::from(App::parse());
    setup_logging(config.debug);

    match run(&config) {
        Ok(summary) => {
            info!(
                bytes = summary.bytes,
                tokens = summary.total_tokens,
                distinct = summary.distinct_words,
                "run finished"
            );
            println!("Time taken is : {}", pipeline::format_elapsed(summary.elapsed));
            ExitCode::SUCCESS
        }
        Err(err) => {
            pipeline::record_failure(&config.error_log_path(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<RunSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let tracker = DownloadTrackerBuilder::default()
        .with_prefix("Downloading")
        .with_finish("done")
        .hidden(!config.progress)
        .build();

    let options = config.fetch.clone().on_progress(tracker.callback());
    let client = ReqwestClient::new(&options)?;
    let fetcher = TextFetcher::new(client).with_options(options);

    let result = runtime.block_on(pipeline::run(&fetcher, BOOK_URL, config.output_dir()));
    match result {
        Ok(summary) => {
            tracker.finish();
            Ok(summary)
        }
        Err(err) => {
            tracker.abandon();
            Err(err)
        }
    }
}
