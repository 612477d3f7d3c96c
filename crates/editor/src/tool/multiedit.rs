//! Editing mode: region select and group move/rotate of the selection

use curve::{CurveError, CurvePath, ScreenRect, ZERO_VECTOR_EPSILON};
use curve_editor_ipc::{ManipulationMode, PointerEvent, ToolMode};
use glam::{Quat, Vec3};
use tracing::{debug, warn};

use super::{EditTool, ToolOutcome};
use crate::gizmo::{rotate_selection, translate_selection};
use crate::picking::ScenePicker;

impl EditTool {
    pub(super) fn handle_edit_pointer<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        event: PointerEvent,
        picker: &P,
    ) -> Result<ToolOutcome, CurveError> {
        match event {
            PointerEvent::ButtonDown { over_control, .. } if event.is_primary() => {
                // Every press starts a new rotation gesture
                self.gizmo.reset();

                if over_control {
                    return Ok(ToolOutcome::Unchanged);
                }
                self.region_origin = Some(event.position());
                debug!("Region select started at {:?}", event.position());
                Ok(ToolOutcome::RegionStarted)
            }
            PointerEvent::Move { .. } => {
                let Some(rect) = self.region_rect(event.position()) else {
                    return Ok(ToolOutcome::Unchanged);
                };
                Ok(self.filter_region(path, rect, picker))
            }
            PointerEvent::ButtonUp { .. } if event.is_primary() => {
                self.gizmo.reset();
                let Some(origin) = self.region_origin.take() else {
                    return Ok(ToolOutcome::Unchanged);
                };

                // Release frame filters too, so a click on empty space deselects
                let rect = ScreenRect::from_corners(origin, event.position());
                match self.filter_region(path, rect, picker) {
                    ToolOutcome::SelectionChanged => Ok(ToolOutcome::SelectionChanged),
                    _ => Ok(ToolOutcome::GestureEnded),
                }
            }
            _ => Ok(ToolOutcome::Unchanged),
        }
    }

    fn filter_region<P: ScenePicker + ?Sized>(
        &mut self,
        path: &CurvePath,
        rect: ScreenRect,
        picker: &P,
    ) -> ToolOutcome {
        if self
            .selection
            .region_filter(path, rect, |world| picker.world_to_screen(world))
        {
            ToolOutcome::SelectionChanged
        } else {
            ToolOutcome::Unchanged
        }
    }

    /// World-space pivot the host should place its group gizmo at.
    pub fn group_pivot(&self, path: &CurvePath) -> Result<Vec3, CurveError> {
        self.selection.world_centroid(path)
    }

    /// Apply a translate-gizmo report: the pivot was dragged to `target`.
    ///
    /// Ignored outside Editing/Translate and during a region select.
    pub fn group_translate(
        &mut self,
        path: &mut CurvePath,
        target: Vec3,
    ) -> Result<ToolOutcome, CurveError> {
        if !self.accepts_group_transform(ManipulationMode::Translate) {
            return Ok(ToolOutcome::Unchanged);
        }

        let diff = self.selection.world_centroid(path)? - target;
        if diff.length_squared() <= ZERO_VECTOR_EPSILON {
            return Ok(ToolOutcome::Unchanged);
        }

        let count = translate_selection(path, &self.selection, diff)?;
        Ok(ToolOutcome::GroupTransformed { count })
    }

    /// Apply a rotate-gizmo report carrying the rotation accumulated since
    /// the gesture started.
    ///
    /// Only the increment since the previous report is applied, about the
    /// selection centroid. Identity increments change nothing.
    pub fn group_rotate(
        &mut self,
        path: &mut CurvePath,
        rotation: Quat,
    ) -> Result<ToolOutcome, CurveError> {
        if !self.accepts_group_transform(ManipulationMode::Rotate) {
            return Ok(ToolOutcome::Unchanged);
        }
        if !rotation.is_finite() || rotation.length_squared() <= ZERO_VECTOR_EPSILON {
            warn!("Ignoring degenerate group rotation {:?}", rotation);
            return Ok(ToolOutcome::Unchanged);
        }

        let pivot = self.selection.centroid(path)?;
        let Some(delta) = self.gizmo.advance(rotation.normalize()) else {
            return Ok(ToolOutcome::Unchanged);
        };

        let count = rotate_selection(path, &self.selection, delta, pivot)?;
        Ok(ToolOutcome::GroupTransformed { count })
    }

    fn accepts_group_transform(&self, manipulation: ManipulationMode) -> bool {
        if self.mode != ToolMode::Editing || self.manipulation != manipulation {
            debug!(
                "Ignoring {:?} group transform in {:?}/{:?}",
                manipulation, self.mode, self.manipulation
            );
            return false;
        }
        !self.is_region_selecting()
    }
}
