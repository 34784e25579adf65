pub mod tracker;

pub use tracker::{DownloadTracker, DownloadTrackerBuilder};
