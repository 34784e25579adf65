use std::sync::Arc;
use std::time::Duration;

use bookfreq_fetch::{FetchPhase, Progress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use once_cell::sync::Lazy;

const PB_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}";

const SPINNER_STYLE: &str =
    "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(SPINNER_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK))
});

/// Renders fetch [`Progress`] events on the terminal.
///
/// Starts as a spinner and turns into a bar once the response announces its
/// length.
pub struct DownloadTracker {
    pb:     ProgressBar,
    finish: Option<String>,
}

impl DownloadTracker {
    /// Callback suitable for `FetchOptions::on_progress`.
    pub fn callback(&self) -> Arc<dyn Fn(&Progress) + Send + Sync> {
        let pb = self.pb.clone();
        Arc::new(move |progress: &Progress| apply(&pb, progress))
    }

    pub fn finish(self) {
        match self.finish {
            Some(msg) => self.pb.finish_with_message(msg),
            None => self.pb.finish(),
        }
    }

    /// Drop the bar from the screen, e.g. after a failed download.
    pub fn abandon(self) { self.pb.finish_and_clear(); }

    pub fn position(&self) -> u64 { self.pb.position() }

    pub fn length(&self) -> Option<u64> { self.pb.length() }
}

fn apply(pb: &ProgressBar, progress: &Progress) {
    match progress.phase {
        FetchPhase::Connecting => {
            pb.set_position(0);
            if progress.retry_count > 0 {
                pb.set_message(format!("retry {}", progress.retry_count));
            } else {
                pb.set_message("connecting");
            }
        }
        FetchPhase::Downloading => {
            if let Some(total) = progress.total_bytes {
                if let (None, Some(style)) = (pb.length(), PB_TEMPLATE.as_ref()) {
                    pb.set_style(style.clone());
                }
                pb.set_length(total);
            }
            pb.set_position(progress.bytes_downloaded);
            if progress.bytes_downloaded == 0 {
                pb.set_message("");
            }
        }
        FetchPhase::Decoding => pb.set_message("decoding"),
        FetchPhase::Completed => pb.set_position(progress.bytes_downloaded),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DownloadTrackerBuilder {
    prefix: Option<String>,
    finish: Option<String>,
    hidden: bool,
}

impl DownloadTrackerBuilder {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_finish(mut self, finish: &str) -> Self {
        self.finish = Some(finish.to_string());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn build(self) -> DownloadTracker {
        let target = if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let pb = ProgressBar::with_draw_target(None, target);
        let pb = if let Some(style) = SPINNER_TEMPLATE.as_ref() {
            pb.with_style(style.clone())
        } else {
            pb
        };

        if let Some(prefix) = self.prefix {
            pb.set_prefix(prefix);
        }
        if !self.hidden {
            pb.enable_steady_tick(Duration::from_millis(100));
        }
        DownloadTracker {
            pb,
            finish: self.finish,
        }
    }
}
