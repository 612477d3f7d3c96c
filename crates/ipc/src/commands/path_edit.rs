//! Curve editing commands issued by the host's inspector.

use curve::{HandleSide, HandleStyle};
use serde::{Deserialize, Serialize};

/// Structural and per-anchor edits requested by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveCommand {
    /// Append an anchor at a world position
    AddPoint { position: [f32; 3] },
    /// Delete an anchor
    RemovePoint { index: usize },
    /// Swap an anchor with its predecessor
    MovePointUp { index: usize },
    /// Swap an anchor with its successor
    MovePointDown { index: usize },
    /// Set an anchor's world position
    SetPointPosition { index: usize, position: [f32; 3] },
    /// Set a local handle offset (coupling rules apply)
    SetHandle {
        index: usize,
        side: HandleSide,
        offset: [f32; 3],
    },
    /// Change an anchor's handle style
    SetHandleStyle { index: usize, style: HandleStyle },
    /// Open or close the loop
    SetClosed { closed: bool },
    /// Samples per segment
    SetResolution { resolution: u32 },
    /// Re-base anchors on their centroid
    CenterPivot,
    /// Replace the path with the default four-anchor loop
    ResetToDefault,
    /// Toggle the host's point list visibility
    SetShowPoints { show: bool },
}
