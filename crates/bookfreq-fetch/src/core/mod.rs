//! Pure transformations for HTTP fetching.
//!
//! Nothing in here performs I/O; the effects layer calls into these helpers.

mod decode;
mod retry;
mod validation;

pub use decode::decode_text;
pub use retry::retry_delay;
pub use validation::{is_http_url, is_retryable_status, is_success};
