//! Immutable data types for HTTP fetching operations.
//!
//! Configuration and progress types passed between the fetch layers without
//! mutation.

pub mod options;
pub mod progress;

pub use options::{FetchOptions, FetchPhase};
pub use progress::Progress;
