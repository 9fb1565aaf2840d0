use swimlane_protocol::ThreadId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: InvalidReason },
    /// The color table was built from a different record set than the one
    /// being laid out.
    #[error("no color assigned to thread {thread_id}")]
    MissingColor { thread_id: ThreadId },
    #[error("zoom ratio must be finite and in (0, 1], got {0}")]
    InvalidZoomRatio(f64),
}

/// Why a record was rejected during validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    #[error("end ({end}) is before start ({start})")]
    EndBeforeStart { start: f64, end: f64 },
    #[error("missing task name")]
    MissingTaskName,
    #[error("missing thread id")]
    MissingThreadId,
    #[error("`{field}` is not a finite number")]
    NonFinite { field: &'static str },
}
