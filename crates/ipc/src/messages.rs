//! Main IPC message enums for communication between host and editor.

use serde::{Deserialize, Serialize};

use crate::commands::{CurveCommand, ManipulationMode, ToolMode};
use crate::input::PointerEvent;

/// Messages from the host to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostToEditor {
    /// Switch the edit tool's mode
    SetToolMode(ToolMode),

    /// The host's active gizmo changed
    SetManipulation(ManipulationMode),

    /// Pointer input in the scene view
    Pointer(PointerEvent),

    /// Translate gizmo moved the selection pivot to a world position
    GroupTranslate { target: [f32; 3] },

    /// Rotate gizmo reports its accumulated rotation (x, y, z, w)
    GroupRotate { rotation: [f32; 4] },

    /// Inspector edit
    Curve(CurveCommand),
}

/// Messages from the editor to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorToHost {
    /// Tool mode changed (for UI sync)
    ToolModeChanged { mode: ToolMode },

    /// Selected anchor indices changed
    SelectionChanged { selected: Vec<usize> },

    /// Curve geometry or structure changed and should be redrawn
    PathChanged { anchor_count: usize },

    /// Anchor positions were re-based; the host should move the path's
    /// outer frame by `offset`
    PivotCentered { offset: [f32; 3] },

    /// Point list visibility changed
    ShowPointsChanged { show: bool },

    /// Error notification
    Error { code: String, message: String },
}
