//! Creating mode: click to place anchors, drag to shape the new handle

use curve::{AnchorControl, CurvePath, HandleSide};
use curve_editor_ipc::PointerEvent;
use tracing::{debug, trace};

use super::{EditTool, ToolOutcome};
use crate::picking::{ScenePicker, resolve_target_point};

impl EditTool {
    pub(super) fn handle_create_pointer<P: ScenePicker + ?Sized>(
        &mut self,
        path: &mut CurvePath,
        event: PointerEvent,
        picker: &P,
    ) -> ToolOutcome {
        match event {
            PointerEvent::ButtonDown { .. } if event.is_primary() => {
                let Some(target) = resolve_target_point(path, picker, event.position()) else {
                    debug!("No placement target under pointer {:?}", event.position());
                    return ToolOutcome::Unchanged;
                };

                let index = path.add_point_at(target);
                self.dragging_new_handle = true;
                ToolOutcome::PointAdded { index }
            }
            PointerEvent::Move { .. } if self.dragging_new_handle => {
                let Some(index) = path.len().checked_sub(1) else {
                    self.dragging_new_handle = false;
                    return ToolOutcome::Unchanged;
                };
                let Some(target) = resolve_target_point(path, picker, event.position()) else {
                    return ToolOutcome::Unchanged;
                };

                trace!("Shaping handle of anchor {} toward {:?}", index, target);
                match path.drag_control(index, AnchorControl::Handle(HandleSide::Second), target) {
                    Ok(true) => ToolOutcome::HandleShaped { index },
                    _ => ToolOutcome::Unchanged,
                }
            }
            PointerEvent::ButtonUp { .. } if event.is_primary() && self.dragging_new_handle => {
                self.dragging_new_handle = false;
                ToolOutcome::GestureEnded
            }
            _ => ToolOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use curve::CurvePath;
    use curve_editor_ipc::{MouseButton, PointerEvent, ToolMode};
    use glam::Vec3;

    use crate::picking::test_support::TopDownPicker;
    use crate::tool::{EditTool, ToolOutcome};

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::ButtonDown {
            button: MouseButton::Left,
            x,
            y,
            over_control: false,
        }
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::ButtonUp {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn test_click_appends_anchor_on_ground_plane() {
        let mut path = CurvePath::new();
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::new();

        let outcome = tool.handle_pointer(&mut path, down(2.0, 3.0), &picker).unwrap();
        assert_eq!(outcome, ToolOutcome::PointAdded { index: 0 });
        assert!(tool.is_dragging_new_handle());
        assert!((path.world_position(0).unwrap() - Vec3::new(2.0, 0.0, 3.0)).length() < 1e-4);

        let outcome = tool.handle_pointer(&mut path, up(2.0, 3.0), &picker).unwrap();
        assert_eq!(outcome, ToolOutcome::GestureEnded);
        assert!(!tool.is_dragging_new_handle());
    }

    #[test]
    fn test_drag_shapes_outgoing_handle() {
        let mut path = CurvePath::new();
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::new();

        tool.handle_pointer(&mut path, down(0.0, 0.0), &picker).unwrap();
        let outcome = tool
            .handle_pointer(&mut path, PointerEvent::Move { x: 1.0, y: 0.0 }, &picker)
            .unwrap();
        assert_eq!(outcome, ToolOutcome::HandleShaped { index: 0 });

        let anchor = path.anchor(0).unwrap();
        assert!((anchor.global_handle2() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
        assert!((anchor.handle1() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-4);

        tool.handle_pointer(&mut path, up(1.0, 0.0), &picker).unwrap();

        // Moving without a press no longer touches handles
        let outcome = tool
            .handle_pointer(&mut path, PointerEvent::Move { x: 5.0, y: 5.0 }, &picker)
            .unwrap();
        assert_eq!(outcome, ToolOutcome::Unchanged);
    }

    #[test]
    fn test_leaving_create_mode_keeps_anchor() {
        let mut path = CurvePath::new();
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::new();

        tool.handle_pointer(&mut path, down(2.0, 3.0), &picker).unwrap();
        let handles = {
            let anchor = path.anchor(0).unwrap();
            (anchor.handle1(), anchor.handle2())
        };

        assert!(tool.set_mode(ToolMode::Idle));
        assert!(!tool.is_dragging_new_handle());
        assert_eq!(path.len(), 1);

        // Neither Idle nor a fresh Creating session resumes the old drag
        let drag = PointerEvent::Move { x: 8.0, y: 8.0 };
        assert_eq!(
            tool.handle_pointer(&mut path, drag, &picker).unwrap(),
            ToolOutcome::Unchanged
        );
        tool.set_mode(ToolMode::Creating);
        assert_eq!(
            tool.handle_pointer(&mut path, drag, &picker).unwrap(),
            ToolOutcome::Unchanged
        );

        let anchor = path.anchor(0).unwrap();
        assert_eq!((anchor.handle1(), anchor.handle2()), handles);
        assert!((path.world_position(0).unwrap() - Vec3::new(2.0, 0.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn test_surface_hit_beats_ground_plane() {
        let mut path = CurvePath::new();
        path.add_point_at(Vec3::ZERO);
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::with_surface(2.5);

        tool.handle_pointer(&mut path, down(4.0, 4.0), &picker).unwrap();
        assert!((path.world_position(1).unwrap() - Vec3::new(4.0, 2.5, 4.0)).length() < 1e-4);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut path = CurvePath::new();
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::new();

        let event = PointerEvent::ButtonDown {
            button: MouseButton::Right,
            x: 0.0,
            y: 0.0,
            over_control: false,
        };
        assert_eq!(
            tool.handle_pointer(&mut path, event, &picker).unwrap(),
            ToolOutcome::Unchanged
        );
        assert!(path.is_empty());
    }

    #[test]
    fn test_missed_plane_adds_nothing() {
        let mut path = CurvePath::new();
        path.add_point_at(Vec3::new(0.0, 1000.0, 0.0));
        let mut tool = EditTool::with_mode(ToolMode::Creating);
        let picker = TopDownPicker::new();

        let outcome = tool.handle_pointer(&mut path, down(1.0, 1.0), &picker).unwrap();
        assert_eq!(outcome, ToolOutcome::Unchanged);
        assert_eq!(path.len(), 1);
        assert!(!tool.is_dragging_new_handle());
    }
}
