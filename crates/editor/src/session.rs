//! Editor session: one path, its edit tool, and the message loop around them

use curve::{AnchorControl, CurveError, CurvePath, SelectionSet};
use curve_editor_config::EditorConfig;
use curve_editor_ipc::{
    CurveCommand, EditorToHost, HostToEditor, IpcError, decode_message, encode_message,
};
use glam::{Quat, Vec3};
use tracing::{debug, info, warn};

use crate::picking::ScenePicker;
use crate::presets::default_curve;
use crate::tool::{EditTool, ToolOutcome};

/// Errors surfaced while handling host messages
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Ipc(#[from] IpcError),
}

impl SessionError {
    /// Stable identifier sent to the host alongside the message text
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Curve(CurveError::IndexOutOfRange { .. }) => "index_out_of_range",
            SessionError::Curve(CurveError::EmptySelection) => "empty_selection",
            SessionError::Curve(CurveError::DegenerateSegment { .. }) => "degenerate_segment",
            SessionError::Ipc(_) => "invalid_message",
        }
    }

    fn to_message(&self) -> EditorToHost {
        EditorToHost::Error {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Editing state for a single curve
pub struct EditorSession {
    config: EditorConfig,
    path: CurvePath,
    tool: EditTool,
    show_points: bool,
}

impl EditorSession {
    /// Start with an empty path at the world origin
    pub fn new(config: EditorConfig) -> Self {
        let mut path = CurvePath::new()
            .with_handle_length(config.effective_handle_length())
            .with_resolution(config.effective_resolution());
        path.set_closed(config.closed);
        Self::with_path(config, path)
    }

    /// Edit an existing path
    pub fn with_path(config: EditorConfig, path: CurvePath) -> Self {
        info!(
            "Curve session started: {} anchors, tool {:?}",
            path.len(),
            config.initial_tool_mode
        );
        Self {
            tool: EditTool::with_mode(config.initial_tool_mode),
            show_points: config.show_points,
            config,
            path,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    pub fn tool(&self) -> &EditTool {
        &self.tool
    }

    pub fn show_points(&self) -> bool {
        self.show_points
    }

    /// Apply one host message and return the notifications it produced.
    pub fn handle_message<P: ScenePicker + ?Sized>(
        &mut self,
        message: HostToEditor,
        picker: &P,
    ) -> Result<Vec<EditorToHost>, SessionError> {
        match message {
            HostToEditor::SetToolMode(mode) => {
                let had_selection = !self.tool.selection().is_empty();
                let mut out = Vec::new();
                if self.tool.set_mode(mode) {
                    out.push(EditorToHost::ToolModeChanged { mode });
                    if had_selection {
                        out.push(self.selection_message());
                    }
                }
                Ok(out)
            }
            HostToEditor::SetManipulation(manipulation) => {
                self.tool.set_manipulation(manipulation);
                Ok(Vec::new())
            }
            HostToEditor::Pointer(event) => {
                let outcome = self.tool.handle_pointer(&mut self.path, event, picker)?;
                Ok(self.outcome_messages(outcome))
            }
            HostToEditor::GroupTranslate { target } => {
                let outcome = self
                    .tool
                    .group_translate(&mut self.path, Vec3::from_array(target))?;
                Ok(self.outcome_messages(outcome))
            }
            HostToEditor::GroupRotate { rotation } => {
                let outcome = self
                    .tool
                    .group_rotate(&mut self.path, Quat::from_array(rotation))?;
                Ok(self.outcome_messages(outcome))
            }
            HostToEditor::Curve(command) => self.apply_command(command),
        }
    }

    /// JSON front end: decode, handle, encode.
    ///
    /// Editing failures come back as [`EditorToHost::Error`] messages so the
    /// host loop keeps running; only malformed payloads are returned as `Err`.
    pub fn handle_json<P: ScenePicker + ?Sized>(
        &mut self,
        payload: &str,
        picker: &P,
    ) -> Result<Vec<String>, IpcError> {
        let message: HostToEditor = decode_message(payload)?;
        let replies = match self.handle_message(message, picker) {
            Ok(replies) => replies,
            Err(SessionError::Ipc(e)) => return Err(e),
            Err(e) => {
                warn!("Curve edit failed: {}", e);
                vec![e.to_message()]
            }
        };

        replies.iter().map(encode_message).collect()
    }

    fn apply_command(&mut self, command: CurveCommand) -> Result<Vec<EditorToHost>, SessionError> {
        debug!("Curve command: {:?}", command);

        match command {
            CurveCommand::AddPoint { position } => {
                self.path.add_point_at(Vec3::from_array(position));
                Ok(vec![self.path_message()])
            }
            CurveCommand::RemovePoint { index } => {
                self.path.remove_at(index)?;
                let before = self.tool.selection().clone();
                self.tool.selection_mut().remap_after_remove(index);
                Ok(self.structural_messages(&before))
            }
            CurveCommand::MovePointUp { index } => {
                let moved_to = self.path.move_up(index)?;
                let before = self.tool.selection().clone();
                self.tool.selection_mut().remap_after_swap(index, moved_to);
                Ok(self.structural_messages(&before))
            }
            CurveCommand::MovePointDown { index } => {
                let moved_to = self.path.move_down(index)?;
                let before = self.tool.selection().clone();
                self.tool.selection_mut().remap_after_swap(index, moved_to);
                Ok(self.structural_messages(&before))
            }
            CurveCommand::SetPointPosition { index, position } => {
                self.path
                    .drag_control(index, AnchorControl::Anchor, Vec3::from_array(position))?;
                Ok(vec![self.path_message()])
            }
            CurveCommand::SetHandle {
                index,
                side,
                offset,
            } => {
                let applied = self
                    .path
                    .anchor_mut(index)?
                    .set_handle(side, Vec3::from_array(offset));
                Ok(if applied {
                    vec![self.path_message()]
                } else {
                    Vec::new()
                })
            }
            CurveCommand::SetHandleStyle { index, style } => {
                let length = self.path.handle_length();
                self.path
                    .anchor_mut(index)?
                    .set_handle_style_with_length(style, length);
                Ok(vec![self.path_message()])
            }
            CurveCommand::SetClosed { closed } => {
                self.path.set_closed(closed);
                Ok(vec![self.path_message()])
            }
            CurveCommand::SetResolution { resolution } => {
                self.path.set_resolution(resolution);
                Ok(vec![self.path_message()])
            }
            CurveCommand::CenterPivot => {
                let offset = self.path.center_pivot();
                Ok(vec![
                    EditorToHost::PivotCentered {
                        offset: offset.to_array(),
                    },
                    self.path_message(),
                ])
            }
            CurveCommand::ResetToDefault => {
                let before = self.tool.selection().clone();
                self.path = default_curve(&self.config, self.path.origin());
                self.tool.selection_mut().clear();
                info!("Curve reset to default loop");
                Ok(self.structural_messages(&before))
            }
            CurveCommand::SetShowPoints { show } => {
                if self.show_points == show {
                    return Ok(Vec::new());
                }
                self.show_points = show;
                Ok(vec![EditorToHost::ShowPointsChanged { show }])
            }
        }
    }

    fn outcome_messages(&self, outcome: ToolOutcome) -> Vec<EditorToHost> {
        if outcome.path_changed() {
            vec![self.path_message()]
        } else if outcome == ToolOutcome::SelectionChanged {
            vec![self.selection_message()]
        } else {
            Vec::new()
        }
    }

    fn structural_messages(&self, selection_before: &SelectionSet) -> Vec<EditorToHost> {
        let mut out = vec![self.path_message()];
        if self.tool.selection() != selection_before {
            out.push(self.selection_message());
        }
        out
    }

    fn path_message(&self) -> EditorToHost {
        EditorToHost::PathChanged {
            anchor_count: self.path.len(),
        }
    }

    fn selection_message(&self) -> EditorToHost {
        EditorToHost::SelectionChanged {
            selected: self.tool.selection().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::test_support::TopDownPicker;
    use curve::HandleSide;
    use curve_editor_ipc::{ManipulationMode, MouseButton, PointerEvent, ToolMode};

    fn editing_session() -> EditorSession {
        let mut session = EditorSession::new(EditorConfig::default());
        let picker = TopDownPicker::new();
        for position in [[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [5.0, 0.0, 10.0]] {
            session
                .handle_message(HostToEditor::Curve(CurveCommand::AddPoint { position }), &picker)
                .unwrap();
        }
        session
            .handle_message(HostToEditor::SetToolMode(ToolMode::Editing), &picker)
            .unwrap();
        session
    }

    fn region_select(session: &mut EditorSession, from: (f32, f32), to: (f32, f32)) {
        let picker = TopDownPicker::new();
        let events = [
            PointerEvent::ButtonDown {
                button: MouseButton::Left,
                x: from.0,
                y: from.1,
                over_control: false,
            },
            PointerEvent::Move { x: to.0, y: to.1 },
            PointerEvent::ButtonUp {
                button: MouseButton::Left,
                x: to.0,
                y: to.1,
            },
        ];
        for event in events {
            session
                .handle_message(HostToEditor::Pointer(event), &picker)
                .unwrap();
        }
    }

    #[test]
    fn test_new_session_uses_config() {
        let config = EditorConfig {
            resolution: 12,
            closed: true,
            show_points: false,
            initial_tool_mode: ToolMode::Creating,
            ..EditorConfig::default()
        };
        let session = EditorSession::new(config);

        assert_eq!(session.path().resolution(), 12);
        assert!(session.path().is_closed());
        assert!(!session.show_points());
        assert_eq!(session.tool().mode(), ToolMode::Creating);
    }

    #[test]
    fn test_remove_point_remaps_selection() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        region_select(&mut session, (4.0, -1.0), (11.0, 11.0));
        assert_eq!(session.tool().selection().to_vec(), vec![1, 2]);

        let replies = session
            .handle_message(HostToEditor::Curve(CurveCommand::RemovePoint { index: 1 }), &picker)
            .unwrap();

        assert_eq!(session.path().len(), 2);
        assert_eq!(
            replies,
            vec![
                EditorToHost::PathChanged { anchor_count: 2 },
                EditorToHost::SelectionChanged { selected: vec![1] },
            ]
        );
    }

    #[test]
    fn test_move_point_keeps_selected_anchor_selected() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        region_select(&mut session, (9.0, -1.0), (11.0, 1.0));
        assert_eq!(session.tool().selection().to_vec(), vec![1]);

        session
            .handle_message(HostToEditor::Curve(CurveCommand::MovePointUp { index: 1 }), &picker)
            .unwrap();

        assert_eq!(session.tool().selection().to_vec(), vec![0]);
        assert_eq!(
            session.path().world_position(0).unwrap(),
            Vec3::new(10.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_group_translate_message() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        region_select(&mut session, (-1.0, -1.0), (11.0, 11.0));
        session
            .handle_message(
                HostToEditor::SetManipulation(ManipulationMode::Translate),
                &picker,
            )
            .unwrap();

        let replies = session
            .handle_message(
                HostToEditor::GroupTranslate {
                    target: [4.0, 0.0, 10.0 / 3.0],
                },
                &picker,
            )
            .unwrap();

        assert_eq!(replies, vec![EditorToHost::PathChanged { anchor_count: 3 }]);
        assert!(
            (session.path().world_position(0).unwrap() - Vec3::new(-1.0, 0.0, 0.0)).length()
                < 1e-4
        );
    }

    #[test]
    fn test_mode_change_reports_dropped_selection() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        region_select(&mut session, (-1.0, -1.0), (11.0, 11.0));

        let replies = session
            .handle_message(HostToEditor::SetToolMode(ToolMode::Idle), &picker)
            .unwrap();

        assert_eq!(
            replies,
            vec![
                EditorToHost::ToolModeChanged {
                    mode: ToolMode::Idle
                },
                EditorToHost::SelectionChanged { selected: vec![] },
            ]
        );
    }

    #[test]
    fn test_center_pivot_reports_offset() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();

        let replies = session
            .handle_message(HostToEditor::Curve(CurveCommand::CenterPivot), &picker)
            .unwrap();

        let EditorToHost::PivotCentered { offset } = &replies[0] else {
            panic!("expected PivotCentered, got {:?}", replies[0]);
        };
        assert!((Vec3::from_array(*offset) - Vec3::new(5.0, 0.0, 10.0 / 3.0)).length() < 1e-4);
        assert!(
            (session.path().world_position(1).unwrap() - Vec3::new(10.0, 0.0, 0.0)).length()
                < 1e-4
        );
    }

    #[test]
    fn test_handle_write_on_corner_is_silent() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        session
            .handle_message(
                HostToEditor::Curve(CurveCommand::SetHandleStyle {
                    index: 0,
                    style: curve::HandleStyle::None,
                }),
                &picker,
            )
            .unwrap();

        let replies = session
            .handle_message(
                HostToEditor::Curve(CurveCommand::SetHandle {
                    index: 0,
                    side: HandleSide::First,
                    offset: [1.0, 0.0, 0.0],
                }),
                &picker,
            )
            .unwrap();
        assert!(replies.is_empty());
        assert_eq!(session.path().anchor(0).unwrap().handle1(), Vec3::ZERO);
    }

    #[test]
    fn test_reset_to_default_replaces_path() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        region_select(&mut session, (-1.0, -1.0), (11.0, 11.0));

        let replies = session
            .handle_message(HostToEditor::Curve(CurveCommand::ResetToDefault), &picker)
            .unwrap();

        assert_eq!(session.path().len(), 4);
        assert!(session.path().is_closed());
        assert!(session.tool().selection().is_empty());
        assert_eq!(
            replies,
            vec![
                EditorToHost::PathChanged { anchor_count: 4 },
                EditorToHost::SelectionChanged { selected: vec![] },
            ]
        );
    }

    #[test]
    fn test_json_errors_become_messages() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();

        let replies = session
            .handle_json(
                r#"{"type":"Curve","data":{"RemovePoint":{"index":9}}}"#,
                &picker,
            )
            .unwrap();
        assert_eq!(replies.len(), 1);

        let reply: EditorToHost = serde_json::from_str(&replies[0]).unwrap();
        let EditorToHost::Error { code, .. } = &reply else {
            panic!("expected error reply, got {reply:?}");
        };
        assert_eq!(code.as_str(), "index_out_of_range");
    }

    #[test]
    fn test_json_huge_index_is_reported_not_fatal() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();
        let payload = format!(
            r#"{{"type":"Curve","data":{{"MovePointDown":{{"index":{}}}}}}}"#,
            usize::MAX
        );

        let replies = session.handle_json(&payload, &picker).unwrap();
        assert_eq!(replies.len(), 1);

        let reply: EditorToHost = serde_json::from_str(&replies[0]).unwrap();
        let EditorToHost::Error { code, .. } = &reply else {
            panic!("expected error reply, got {reply:?}");
        };
        assert_eq!(code.as_str(), "index_out_of_range");
        assert_eq!(session.path().len(), 3);
    }

    #[test]
    fn test_json_rejects_malformed_payload() {
        let mut session = editing_session();
        let picker = TopDownPicker::new();

        assert!(matches!(
            session.handle_json("", &picker),
            Err(IpcError::InvalidFormat(_))
        ));
        assert!(session.handle_json("{not json", &picker).is_err());
    }
}
