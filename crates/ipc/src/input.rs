//! Pointer input events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer input events in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Button pressed. `over_control` is set by the host when the press
    /// landed on one of its own handles or gizmos.
    ButtonDown {
        button: MouseButton,
        x: f32,
        y: f32,
        over_control: bool,
    },
    Move { x: f32, y: f32 },
    ButtonUp { button: MouseButton, x: f32, y: f32 },
}

impl PointerEvent {
    /// Screen position carried by the event.
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::ButtonDown { x, y, .. }
            | PointerEvent::Move { x, y }
            | PointerEvent::ButtonUp { x, y, .. } => Vec2::new(x, y),
        }
    }

    /// Button carried by the event, if any.
    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            PointerEvent::ButtonDown { button, .. } | PointerEvent::ButtonUp { button, .. } => {
                Some(button)
            }
            PointerEvent::Move { .. } => None,
        }
    }

    /// Whether this event involves the primary button.
    pub fn is_primary(&self) -> bool {
        self.button() == Some(MouseButton::Left)
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
