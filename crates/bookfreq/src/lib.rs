//! Download *War and Peace* and write its word-frequency reports.
//!
//! The binary in `main.rs` is a thin shell over [`pipeline::run`]; everything
//! it wires together is public here so it can be exercised in tests.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod ui;
