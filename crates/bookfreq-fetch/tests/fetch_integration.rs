//! Retry, status, and decoding behaviour of `TextFetcher` against an
//! in-memory HTTP client.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bookfreq_fetch::{
    FetchError, FetchOptions, FetchPhase, HttpClient, HttpResponse, Progress, TextFetcher,
};
use bytes::Bytes;
use futures_util::stream;

const URL: &str = "http://www.gutenberg.org/files/2600/2600-0.txt";

#[derive(Debug)]
struct TestError(String);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl std::error::Error for TestError {}

enum Reply {
    Status(u16),
    Body(Vec<&'static [u8]>),
    Transport(&'static str),
    BrokenBody,
}

/// Serves one scripted reply per request, in order.
struct ScriptedClient {
    replies: Mutex<VecDeque<Reply>>,
    calls:   AtomicU32,
    headers: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls:   AtomicU32::new(0),
            headers: Mutex::new(Vec::new()),
        }
    }

    fn next_reply(&self, headers: &[(String, String)]) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.headers.lock().unwrap() = headers.to_vec();
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

impl HttpClient for ScriptedClient {
    type Error = TestError;

    async fn get(
        &self,
        _url: &str,
        headers: &[(String, String)],
    ) -> Result<HttpResponse<TestError>, TestError> {
        match self.next_reply(headers) {
            Reply::Status(status) => Ok(HttpResponse {
                status,
                content_length: Some(0),
                body: Box::pin(stream::empty::<Result<Bytes, TestError>>()),
            }),
            Reply::Body(chunks) => {
                let len = chunks.iter().map(|c| c.len() as u64).sum::<u64>();
                let items: Vec<Result<Bytes, TestError>> =
                    chunks.into_iter().map(|c| Ok(Bytes::from_static(c))).collect();
                Ok(HttpResponse {
                    status:         200,
                    content_length: Some(len),
                    body:           Box::pin(stream::iter(items)),
                })
            }
            Reply::Transport(msg) => Err(TestError(msg.to_string())),
            Reply::BrokenBody => {
                let items: Vec<Result<Bytes, TestError>> = vec![
                    Ok(Bytes::from_static(b"partial ")),
                    Err(TestError("connection reset".to_string())),
                ];
                Ok(HttpResponse {
                    status:         200,
                    content_length: None,
                    body:           Box::pin(stream::iter(items)),
                })
            }
        }
    }
}

fn body(chunks: &[&'static [u8]]) -> Reply { Reply::Body(chunks.to_vec()) }

fn fast_options() -> FetchOptions {
    FetchOptions::default()
        .max_retries(3)
        .retry_backoff(Duration::ZERO)
}

fn fetcher(replies: Vec<Reply>) -> TextFetcher<ScriptedClient> {
    TextFetcher::new(ScriptedClient::new(replies)).with_options(fast_options())
}

#[tokio::test]
async fn test_fetch_joins_chunks() {
    let f = fetcher(vec![body(&[b"the The ", b"the cat"])]);
    let text = f.fetch_text(URL).await.unwrap();
    assert_eq!(text, "the The the cat");
}

#[tokio::test]
async fn test_fetch_strips_bom() {
    let f = fetcher(vec![body(&[b"\xEF\xBB\xBFThe Project"])]);
    assert_eq!(f.fetch_text(URL).await.unwrap(), "The Project");
}

#[tokio::test]
async fn test_retries_server_errors_then_succeeds() {
    let client = ScriptedClient::new(vec![
        Reply::Status(503),
        Reply::Transport("connection refused"),
        body(&[b"ok"]),
    ]);
    let f = TextFetcher::new(client).with_options(fast_options());

    assert_eq!(f.fetch_text(URL).await.unwrap(), "ok");
    assert_eq!(f.client().calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let f = fetcher(vec![Reply::Status(404), body(&[b"never"])]);
    let err = f.fetch_text(URL).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404 }));
    assert_eq!(f.client().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exhausted_retries() {
    let f = fetcher(vec![
        Reply::Status(500),
        Reply::Status(502),
        Reply::BrokenBody,
        Reply::Status(504),
    ]);

    match f.fetch_text(URL).await.unwrap_err() {
        FetchError::MaxRetriesExceeded { count, last } => {
            assert_eq!(count, 4);
            assert!(matches!(*last, FetchError::Status { status: 504 }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_no_retries_returns_original_error() {
    let f = TextFetcher::new(ScriptedClient::new(vec![Reply::Transport("dns failure")]))
        .with_options(fast_options().max_retries(0));

    match f.fetch_text(URL).await.unwrap_err() {
        FetchError::Network(msg) => assert_eq!(msg, "dns failure"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_utf8_is_not_retried() {
    let f = fetcher(vec![body(&[b"\xff\xfe"]), body(&[b"unused"])]);
    assert!(matches!(
        f.fetch_text(URL).await.unwrap_err(),
        FetchError::Encoding(_)
    ));
    assert_eq!(f.client().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_url_never_reaches_client() {
    let f = fetcher(vec![]);
    assert!(matches!(
        f.fetch_text("gutenberg.org/2600.txt").await.unwrap_err(),
        FetchError::InvalidUrl(_)
    ));
    assert_eq!(f.client().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_headers_are_forwarded() {
    let client = ScriptedClient::new(vec![body(&[b"x"])]);
    let f = TextFetcher::new(client).with_options(fast_options().header("Accept", "text/plain"));
    f.fetch_text(URL).await.unwrap();

    let seen = f.client().headers.lock().unwrap();
    assert_eq!(*seen, vec![("Accept".to_string(), "text/plain".to_string())]);
}

#[tokio::test]
async fn test_progress_phases_in_order() {
    let seen: Arc<Mutex<Vec<Progress>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let options = fast_options().on_progress(Arc::new(move |p: &Progress| {
        sink.lock().unwrap().push(p.clone());
    }));

    let f = TextFetcher::new(ScriptedClient::new(vec![
        Reply::Status(503),
        body(&[b"ab", b"cd"]),
    ]))
    .with_options(options);
    f.fetch_text(URL).await.unwrap();

    let seen = seen.lock().unwrap();
    let phases: Vec<FetchPhase> = seen.iter().map(|p| p.phase).collect();
    assert_eq!(phases, vec![
        FetchPhase::Connecting,
        FetchPhase::Connecting,
        FetchPhase::Downloading,
        FetchPhase::Downloading,
        FetchPhase::Downloading,
        FetchPhase::Decoding,
        FetchPhase::Completed,
    ]);

    assert_eq!(seen[0].retry_count, 0);
    assert_eq!(seen[1].retry_count, 1);

    let last = seen.last().unwrap();
    assert_eq!(last.bytes_downloaded, 4);
    assert_eq!(last.total_bytes, Some(4));
    assert_eq!(last.percentage(), Some(100.0));
}
