use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::progress::Progress;

/// Phases of a fetch operation.
///
/// Fetches progress through these phases in order:
/// Connecting → Downloading → Decoding → Completed
///
/// Retries return to the Connecting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Request sent, waiting for the response head.
    #[default]
    Connecting,

    /// Streaming the response body into memory.
    Downloading,

    /// Turning the collected bytes into text.
    Decoding,

    /// Terminal state for successful fetches.
    Completed,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::Connecting => write!(f, "Connecting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Decoding => write!(f, "Decoding"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Configuration for HTTP fetching operations.
///
/// # Examples
///
/// ```
/// use bookfreq_fetch::FetchOptions;
/// use std::time::Duration;
///
/// let options = FetchOptions::default()
///     .max_retries(5)
///     .timeout(Duration::from_secs(60))
///     .header("User-Agent", "bookfreq/0.1");
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Time allowed to establish the TCP/TLS connection.
    ///
    /// Default: 30s
    pub connect_timeout: Duration,

    /// Time allowed for the whole request, body included.
    ///
    /// Default: 120s
    pub timeout: Duration,

    /// Maximum number of retry attempts for transient failures.
    ///
    /// - Retries are triggered for network errors and 408/429/5xx responses
    /// - Other 4xx responses and decoding failures are never retried
    /// - Total attempts = 1 (initial) + max_retries
    ///
    /// Default: 3
    pub max_retries: u32,

    /// Base delay for exponential backoff between retries.
    ///
    /// The actual delay for retry N (0-indexed) is: `retry_backoff * 2^N`
    ///
    /// Default: 500ms
    pub retry_backoff: Duration,

    /// Custom HTTP headers sent with every request, including retries.
    pub headers: Arc<[(String, String)]>,

    /// Progress callback invoked on phase transitions and after each chunk.
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff", &self.retry_backoff)
            .field("headers", &self.headers)
            .field("on_progress", &"{ ... }")
            .finish()
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout:         Duration::from_secs(120),
            max_retries:     3,
            retry_backoff:   Duration::from_millis(500),
            headers:         Arc::new([]),
            on_progress:     None,
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Set the progress callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfreq_fetch::{FetchOptions, FetchPhase};
    /// use std::sync::Arc;
    ///
    /// let options = FetchOptions::default()
    ///     .on_progress(Arc::new(|progress| {
    ///         if progress.phase == FetchPhase::Completed {
    ///             println!("{} bytes", progress.bytes_downloaded);
    ///         }
    ///     }));
    /// ```
    #[must_use]
    pub fn on_progress(mut self, on_progress: Arc<dyn Fn(&Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(on_progress);
        self
    }
}
