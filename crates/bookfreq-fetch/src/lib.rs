//! HTTP text retrieval with explicit timeouts and retry.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations (backoff, status classification, decoding)
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! # Key Features
//!
//! - **Explicit policy**: connect/request timeouts and retry backoff are
//!   [`FetchOptions`] values, never implicit.
//! - **Streaming body**: chunks are accumulated while progress is reported.
//! - **Mechanism-Only**: no UI; callers render progress however they like.

mod core;
mod data;
mod effects;
mod error;

pub use self::core::{decode_text, is_http_url, is_retryable_status, is_success, retry_delay};
pub use data::{FetchOptions, FetchPhase, Progress};
pub use effects::{BoxStream, HttpClient, HttpResponse, TextFetcher};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
