//! I/O operations for HTTP fetching.
//!
//! Network access lives behind [`HttpClient`] so the retry and decoding
//! logic in [`TextFetcher`] can be driven by in-memory clients in tests.

mod fetcher;
mod http;

pub use fetcher::TextFetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
