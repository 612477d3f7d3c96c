//! Rotation chain tracking for the group rotate gizmo

use glam::Quat;

use super::transform::is_identity_rotation;

/// Accumulated and previously applied rotation of the group gizmo.
///
/// The host's rotate handle reports the total rotation since the gesture
/// started; the tool applies `rotation * previous.inverse()` each time so the
/// anchors never rotate twice by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupGizmoState {
    /// Latest accumulated rotation reported by the host
    pub group_rotation: Quat,
    /// Rotation that has already been applied to the anchors
    pub previous_group_rotation: Quat,
}

impl Default for GroupGizmoState {
    fn default() -> Self {
        Self {
            group_rotation: Quat::IDENTITY,
            previous_group_rotation: Quat::IDENTITY,
        }
    }
}

impl GroupGizmoState {
    /// Start a fresh rotation chain (gesture start or end)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a new accumulated rotation and return the incremental delta.
    ///
    /// Returns `None` when the delta is (numerically) the identity; the chain
    /// is left untouched in that case.
    pub fn advance(&mut self, rotation: Quat) -> Option<Quat> {
        let delta = (rotation * self.previous_group_rotation.inverse()).normalize();
        if is_identity_rotation(delta) {
            return None;
        }

        self.group_rotation = rotation;
        self.previous_group_rotation = rotation;
        Some(delta)
    }

    /// Whether no rotation has been applied since the last reset
    pub fn is_at_rest(&self) -> bool {
        is_identity_rotation(self.previous_group_rotation)
    }
}
