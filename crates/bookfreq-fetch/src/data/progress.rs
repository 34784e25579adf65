use crate::data::options::FetchPhase;

/// Represents the current state of a fetch operation.
///
/// Passed to progress callbacks with the current phase, bytes received, and
/// retry status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub phase: FetchPhase,

    /// Number of body bytes received in the current attempt.
    pub bytes_downloaded: u64,

    /// Total expected bytes, if the server sent Content-Length.
    pub total_bytes: Option<u64>,

    /// Current retry attempt (0 = first attempt).
    pub retry_count: u32,
}

impl Progress {
    pub fn new(
        phase: FetchPhase,
        bytes_downloaded: u64,
        total_bytes: Option<u64>,
        retry_count: u32,
    ) -> Self {
        Self {
            phase,
            bytes_downloaded,
            total_bytes,
            retry_count,
        }
    }

    pub fn percentage(&self) -> Option<f32> {
        self.total_bytes.map(|total| {
            if total == 0 {
                0.0
            } else {
                (self.bytes_downloaded as f32 / total as f32) * 100.0
            }
        })
    }
}
