//! Word frequency analysis for plain-text books.
//!
//! Text is split on whitespace runs, identical tokens are grouped into
//! [`WordStat`] records ordered by descending count, and the report views
//! select from that ordering.
//!
//! # Views
//!
//! - [`top_by_count`]: the most frequent words
//! - [`top_by_length`]: the first words longer than a threshold, in count
//!   order (not re-sorted by length)

mod aggregate;
mod analysis;
mod report;
mod stat;
mod tokenize;

pub use aggregate::aggregate;
pub use analysis::Analysis;
pub use report::{MIN_LENGTH, TOP_N, format_line, top_by_count, top_by_length};
pub use stat::WordStat;
pub use tokenize::tokenize;
