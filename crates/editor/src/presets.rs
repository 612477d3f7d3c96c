//! Default curve shapes

use curve::CurvePath;
use curve_editor_config::EditorConfig;
use glam::Vec3;

/// Radius of the default loop
const DEFAULT_LOOP_RADIUS: f32 = 0.5;

/// Handle magnitude that makes four cubic segments approximate a circle of
/// [`DEFAULT_LOOP_RADIUS`]
const DEFAULT_LOOP_HANDLE: f32 = 0.28;

/// A closed four-anchor loop in the XZ plane around `origin`.
///
/// Anchors sit at +Z, +X, -Z, -X (in that order) with `Connected` handles
/// tangent to the circle.
pub fn default_curve(config: &EditorConfig, origin: Vec3) -> CurvePath {
    let mut path = CurvePath::with_origin(origin)
        .with_handle_length(config.effective_handle_length())
        .with_resolution(config.effective_resolution());

    let r = DEFAULT_LOOP_RADIUS;
    let h = DEFAULT_LOOP_HANDLE;
    let layout = [
        (Vec3::new(0.0, 0.0, r), Vec3::new(-h, 0.0, 0.0)),
        (Vec3::new(r, 0.0, 0.0), Vec3::new(0.0, 0.0, h)),
        (Vec3::new(0.0, 0.0, -r), Vec3::new(h, 0.0, 0.0)),
        (Vec3::new(-r, 0.0, 0.0), Vec3::new(0.0, 0.0, -h)),
    ];

    for (position, handle1) in layout {
        let index = path.add_point_at(origin + position);
        if let Ok(anchor) = path.anchor_mut(index) {
            anchor.set_handle1(handle1);
        }
    }
    path.set_closed(true);
    path
}
