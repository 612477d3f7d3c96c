//! Modal edit tool
//!
//! Three modes, switched by the host:
//! - Idle: pointer input is ignored
//! - Creating: primary press appends an anchor, dragging shapes its outgoing
//!   handle
//! - Editing: pressing on empty space starts a region select; the host's
//!   translate/rotate gizmo moves the selection as a group
//!
//! All transient gesture state lives here and is cleared whenever the mode
//! changes.

mod create;
mod multiedit;

use curve::{CurveError, CurvePath, ScreenRect, SelectionSet};
use curve_editor_ipc::{ManipulationMode, MouseButton, PointerEvent, ToolMode};
use glam::Vec2;
use tracing::{debug, info};

use crate::gizmo::GroupGizmoState;
use crate::picking::ScenePicker;

/// What a tool call did to the path or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Event was not relevant in the current state
    Unchanged,
    /// A new anchor was appended
    PointAdded { index: usize },
    /// The newest anchor's handles were reshaped by a drag
    HandleShaped { index: usize },
    /// A region select gesture started
    RegionStarted,
    /// Selection membership changed
    SelectionChanged,
    /// A drag or region gesture finished
    GestureEnded,
    /// Selected anchors were moved or rotated
    GroupTransformed { count: usize },
}

impl ToolOutcome {
    /// Whether the path geometry changed.
    pub fn path_changed(&self) -> bool {
        matches!(
            self,
            ToolOutcome::PointAdded { .. }
                | ToolOutcome::HandleShaped { .. }
                | ToolOutcome::GroupTransformed { .. }
        )
    }
}

/// Interactive editing state for one path.
#[derive(Debug, Clone, Default)]
pub struct EditTool {
    mode: ToolMode,
    manipulation: ManipulationMode,
    /// Set between a Creating-mode press and its release
    dragging_new_handle: bool,
    /// Screen anchor of an active region select
    region_origin: Option<Vec2>,
    gizmo: GroupGizmoState,
    selection: SelectionSet,
}

impl EditTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ToolMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Switch modes. Leaving a mode drops every in-flight gesture and the
    /// selection. Returns `false` if `mode` was already active.
    pub fn set_mode(&mut self, mode: ToolMode) -> bool {
        if self.mode == mode {
            return false;
        }

        self.reset_transient();
        self.selection.clear();
        info!("Curve tool: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        true
    }

    pub fn manipulation(&self) -> ManipulationMode {
        self.manipulation
    }

    /// Track the host's active gizmo. A change restarts the rotation chain.
    pub fn set_manipulation(&mut self, manipulation: ManipulationMode) {
        if self.manipulation != manipulation {
            debug!("Curve tool manipulation: {:?}", manipulation);
            self.gizmo.reset();
            self.manipulation = manipulation;
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Mutable access for hosts that select anchors directly (e.g. from a
    /// point list). Callers must keep indices valid for the edited path.
    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn gizmo(&self) -> &GroupGizmoState {
        &self.gizmo
    }

    pub fn is_dragging_new_handle(&self) -> bool {
        self.dragging_new_handle
    }

    pub fn is_region_selecting(&self) -> bool {
        self.region_origin.is_some()
    }

    /// Rectangle of the active region select, for the host to draw.
    pub fn region_rect(&self, current: Vec2) -> Option<ScreenRect> {
        self.region_origin
            .map(|origin| ScreenRect::from_corners(origin, current))
    }

    /// Feed one pointer event to the active mode.
    pub fn handle_pointer<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        event: PointerEvent,
        picker: &P,
    ) -> Result<ToolOutcome, CurveError> {
        match self.mode {
            ToolMode::Idle => Ok(ToolOutcome::Unchanged),
            ToolMode::Creating => Ok(self.handle_create_pointer(path, event, picker)),
            ToolMode::Editing => self.handle_edit_pointer(path, event, picker),
        }
    }

    pub fn pointer_down<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        pointer: Vec2,
        button: MouseButton,
        over_control: bool,
        picker: &P,
    ) -> Result<ToolOutcome, CurveError> {
        let event = PointerEvent::ButtonDown {
            button,
            x: pointer.x,
            y: pointer.y,
            over_control,
        };
        self.handle_pointer(path, event, picker)
    }

    pub fn pointer_move<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        pointer: Vec2,
        picker: &P,
    ) -> Result<ToolOutcome, CurveError> {
        let event = PointerEvent::Move {
            x: pointer.x,
            y: pointer.y,
        };
        self.handle_pointer(path, event, picker)
    }

    pub fn pointer_up<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        pointer: Vec2,
        button: MouseButton,
        picker: &P,
    ) -> Result<ToolOutcome, CurveError> {
        let event = PointerEvent::ButtonUp {
            button,
            x: pointer.x,
            y: pointer.y,
        };
        self.handle_pointer(path, event, picker)
    }

    fn reset_transient(&mut self) {
        self.dragging_new_handle = false;
        self.region_origin = None;
        self.gizmo.reset();
    }
}
