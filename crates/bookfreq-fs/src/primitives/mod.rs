pub mod append;
pub mod atomic_write;

pub use append::append_lines;
pub use atomic_write::{AtomicWriteOptions, atomic_read, atomic_write};
