//! Host picking seam and target-point resolution for point creation.

use curve::{CurvePath, Plane, Ray};
use glam::{Vec2, Vec3};

/// Scene queries the host answers for the edit tool.
///
/// Implementations wrap the host's camera and physics; the editor never
/// touches them directly.
pub trait ScenePicker {
    /// World-space hit on scene geometry under the pointer, if any.
    fn surface_hit(&self, pointer: Vec2) -> Option<Vec3>;

    /// World-space ray through the pointer.
    fn pointer_ray(&self, pointer: Vec2) -> Option<Ray>;

    /// Project a world-space point to screen space; `None` if it is not
    /// visible (e.g. behind the camera).
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;
}

/// Where a new anchor under `pointer` should go.
///
/// Prefers a surface hit. Otherwise intersects the pointer ray with the
/// horizontal plane through the last anchor (or the path origin when the
/// path is empty).
pub fn resolve_target_point<P: ScenePicker + ?Sized>(
    path: &CurvePath,
    picker: &P,
    pointer: Vec2,
) -> Option<Vec3> {
    if let Some(hit) = picker.surface_hit(pointer) {
        return Some(hit);
    }

    let ray = picker.pointer_ray(pointer)?;
    let plane_point = path
        .last()
        .map(|anchor| path.to_world(anchor.position()))
        .unwrap_or(path.origin());

    Plane::horizontal(plane_point).intersect_point(&ray)
}
