use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Response head plus a streaming body.
pub struct HttpResponse<E> {
    pub status:         u16,
    /// Value of the Content-Length header, if present.
    pub content_length: Option<u64>,
    pub body:           BoxStream<'static, std::result::Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations handle their own redirect following and timeout
/// enforcement. Non-2xx responses are returned as values, not errors, so the
/// caller can decide what to retry.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - In-memory implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET request and return the response head with a body stream.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (DNS failure,
    /// connection refused, timeout, TLS failure, etc.).
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::FetchOptions;
    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Build a client that enforces the timeouts in `options`.
        pub fn new(options: &FetchOptions) -> Result<Self> {
            let client = reqwest::Client::builder()
                .connect_timeout(options.connect_timeout)
                .timeout(options.timeout)
                .user_agent(concat!("bookfreq/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| FetchError::Client(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }

            let response = request.send().await?;
            let status = response.status().as_u16();
            let content_length = response.content_length();

            Ok(HttpResponse {
                status,
                content_length,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
