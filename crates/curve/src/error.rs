//! Error types for curve operations.

/// Errors reported by path and selection operations.
///
/// None of these are fatal; a host calling every frame is expected to skip
/// the frame and keep running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("Anchor index {index} out of range (path has {count} anchors)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Operation requires a non-empty selection")]
    EmptySelection,

    #[error("Path with {count} anchors (closed: {closed}) has no segments")]
    DegenerateSegment { count: usize, closed: bool },
}
