use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::core::{decode_text, is_http_url, is_success, retry_delay};
use crate::data::{FetchOptions, FetchPhase, Progress};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Upper bound on the buffer reserved up front from a Content-Length header.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

/// Retrieves a whole resource as text, retrying transient failures.
pub struct TextFetcher<C: HttpClient> {
    client:  C,
    options: FetchOptions,
}

impl<C: HttpClient> TextFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C { &self.client }

    /// Fetch `url` and decode the body as UTF-8.
    ///
    /// Transport errors and retryable statuses are retried up to
    /// `max_retries` times with exponential backoff. Once retries are
    /// exhausted the last failure is wrapped in
    /// [`FetchError::MaxRetriesExceeded`].
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        if !is_http_url(url) {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let mut retry_count = 0u32;
        loop {
            match self.attempt(url, retry_count).await {
                Ok((body, total_bytes)) => {
                    let bytes_downloaded = body.len() as u64;
                    self.report_progress(Progress::new(
                        FetchPhase::Decoding,
                        bytes_downloaded,
                        total_bytes,
                        retry_count,
                    ));
                    let text = decode_text(body)?;
                    self.report_progress(Progress::new(
                        FetchPhase::Completed,
                        bytes_downloaded,
                        total_bytes,
                        retry_count,
                    ));
                    debug!(url, bytes = bytes_downloaded, attempts = retry_count + 1, "fetch completed");
                    return Ok(text);
                }
                Err(e) if e.is_transient() && retry_count < self.options.max_retries => {
                    let delay = retry_delay(retry_count, self.options.retry_backoff);
                    warn!(url, error = %e, attempt = retry_count + 1, ?delay, "fetch failed, retrying");
                    tokio::time::sleep(delay).await;
                    retry_count += 1;
                }
                Err(e) if e.is_transient() && retry_count > 0 => {
                    return Err(FetchError::MaxRetriesExceeded {
                        count: retry_count + 1,
                        last:  Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn attempt(&self, url: &str, retry_count: u32) -> Result<(Vec<u8>, Option<u64>)> {
        self.report_progress(Progress::new(FetchPhase::Connecting, 0, None, retry_count));

        let response = self
            .client
            .get(url, &self.options.headers)
            .await
            .map_err(network_error)?;
        debug!(url, status = response.status, content_length = ?response.content_length, "response received");

        if !is_success(response.status) {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let total_bytes = response.content_length;
        let reserve = total_bytes.unwrap_or(0).min(MAX_PREALLOCATION) as usize;
        let mut body = Vec::with_capacity(reserve);
        self.report_progress(Progress::new(FetchPhase::Downloading, 0, total_bytes, retry_count));

        let mut stream = response.body;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(network_error)?;
            body.extend_from_slice(&chunk);
            self.report_progress(Progress::new(
                FetchPhase::Downloading,
                body.len() as u64,
                total_bytes,
                retry_count,
            ));
        }

        Ok((body, total_bytes))
    }

    fn report_progress(&self, progress: Progress) {
        if let Some(ref callback) = self.options.on_progress {
            callback(&progress);
        }
    }
}

/// Flatten a transport error and its sources into one message.
fn network_error<E: std::error::Error>(e: E) -> FetchError {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    FetchError::Network(message)
}
