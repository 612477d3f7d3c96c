//! Edit tool mode and manipulation types.

use serde::{Deserialize, Serialize};

/// Modal state of the curve edit tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// No interactive behavior
    #[default]
    Idle,
    /// Clicking places new anchors; dragging shapes the new anchor's handle
    Creating,
    /// Region select plus group move/rotate of the selected anchors
    Editing,
}

/// The host's active manipulation gizmo while editing a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManipulationMode {
    #[default]
    None,
    Translate,
    Rotate,
}
