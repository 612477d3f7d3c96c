//! Curve editor - modal edit tool and host-facing session
//!
//! - [`tool::EditTool`] - Idle / Creating / Editing state machine fed by pointer events
//! - [`gizmo`] - Rotation chain and rigid group transforms for multi-edit
//! - [`picking::ScenePicker`] - What the host must provide (surface hits, rays, projection)
//! - [`session::EditorSession`] - Config + path + tool, driven by IPC messages
//! - [`presets`] - Default curve shapes

pub mod gizmo;
pub mod picking;
pub mod presets;
pub mod session;
pub mod tool;

pub use gizmo::GroupGizmoState;
pub use picking::{ScenePicker, resolve_target_point};
pub use presets::default_curve;
pub use session::{EditorSession, SessionError};
pub use tool::{EditTool, ToolOutcome};
