//! Rigid group transforms applied to selected anchors

use curve::{
    CurveError, CurvePath, HandleStyle, IDENTITY_ROTATION_EPSILON, SelectionSet,
    ZERO_VECTOR_EPSILON,
};
use glam::{Quat, Vec3};
use tracing::trace;

/// Whether `rotation` is the identity up to quaternion sign.
pub fn is_identity_rotation(rotation: Quat) -> bool {
    rotation.dot(Quat::IDENTITY).abs() >= 1.0 - IDENTITY_ROTATION_EPSILON
}

/// Subtract `diff` from every selected anchor's position.
///
/// `diff` is `centroid - gizmo target`, so the selection follows the gizmo.
/// Near-zero differences are skipped. Returns the number of anchors moved.
pub fn translate_selection(
    path: &mut CurvePath,
    selection: &SelectionSet,
    diff: Vec3,
) -> Result<usize, CurveError> {
    if diff.length_squared() <= ZERO_VECTOR_EPSILON {
        return Ok(0);
    }

    // Validate every index before the first write
    for index in selection.iter() {
        path.anchor(index)?;
    }

    for index in selection.iter() {
        path.anchor_mut(index)?.translate(-diff);
    }

    trace!("Translated {} anchors by {:?}", selection.len(), -diff);
    Ok(selection.len())
}

/// Rotate selected anchors by `delta` about `pivot` (local frame).
///
/// Positions are rotated about the pivot. Only the first handle is rotated;
/// `Connected` anchors mirror it into the second, `Broken` anchors keep
/// their second handle as is, and `None` anchors have no handles to turn.
pub fn rotate_selection(
    path: &mut CurvePath,
    selection: &SelectionSet,
    delta: Quat,
    pivot: Vec3,
) -> Result<usize, CurveError> {
    if is_identity_rotation(delta) {
        return Ok(0);
    }

    for index in selection.iter() {
        path.anchor(index)?;
    }

    for index in selection.iter() {
        let anchor = path.anchor_mut(index)?;
        anchor.set_position(pivot + delta * (anchor.position() - pivot));
        if anchor.handle_style() != HandleStyle::None {
            anchor.set_handle1(delta * anchor.handle1());
        }
    }

    trace!("Rotated {} anchors about {:?}", selection.len(), pivot);
    Ok(selection.len())
}
