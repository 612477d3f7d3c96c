//! Shared configuration for the curve editor
//!
//! This crate provides the single source of truth for per-session editor
//! settings. A host builds an [`EditorConfig`] (or deserializes one from its
//! own settings store) and hands it to the editor session; nothing here is
//! process-wide state.

use serde::{Deserialize, Serialize};

pub use curve::{DEFAULT_HANDLE_LENGTH, DEFAULT_RESOLUTION};
pub use curve_editor_ipc::ToolMode;

/// Default curve draw colour (RGBA, 0.0-1.0)
pub const DEFAULT_DRAW_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Editor settings carried by a host's editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Samples per segment for new paths
    pub resolution: u32,
    /// Handle length for new anchors
    pub handle_length: f32,
    /// Colour the host should draw the curve in
    pub draw_color: [f32; 4],
    /// Whether the host lists individual points (inspector foldout state)
    pub show_points: bool,
    /// Whether new paths start closed
    pub closed: bool,
    /// Mode the edit tool starts in
    pub initial_tool_mode: ToolMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            handle_length: DEFAULT_HANDLE_LENGTH,
            draw_color: DEFAULT_DRAW_COLOR,
            show_points: true,
            closed: false,
            initial_tool_mode: ToolMode::Idle,
        }
    }
}

impl EditorConfig {
    /// Resolution clamped to at least one sample step
    pub fn effective_resolution(&self) -> u32 {
        self.resolution.max(1)
    }

    /// Handle length, falling back to the default for non-positive or
    /// non-finite values
    pub fn effective_handle_length(&self) -> f32 {
        if self.handle_length.is_finite() && self.handle_length > 0.0 {
            self.handle_length
        } else {
            DEFAULT_HANDLE_LENGTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
        assert_eq!(config.handle_length, DEFAULT_HANDLE_LENGTH);
        assert_eq!(config.draw_color, DEFAULT_DRAW_COLOR);
        assert!(config.show_points);
        assert_eq!(config.initial_tool_mode, ToolMode::Idle);
    }

    #[test]
    fn test_effective_values() {
        let config = EditorConfig {
            resolution: 0,
            handle_length: -1.0,
            ..Default::default()
        };
        assert_eq!(config.effective_resolution(), 1);
        assert_eq!(config.effective_handle_length(), DEFAULT_HANDLE_LENGTH);
    }
}
