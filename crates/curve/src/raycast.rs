//! Ray-plane intersection for placing anchors without a surface hit.
//!
//! When the host cannot resolve a surface under the cursor, new anchors are
//! dropped onto a horizontal plane through the previous anchor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Epsilon for rejecting rays parallel to a plane
const EPSILON: f32 = 1e-6;

/// A world-space ray
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Direction of the ray (should be normalized for consistent distances)
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane given by a normal and a point on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
        }
    }

    /// Horizontal plane (normal +Y) through `point`.
    pub fn horizontal(point: Vec3) -> Self {
        Self::new(Vec3::Y, point)
    }

    /// Distance along `ray` to the plane.
    ///
    /// # Returns
    /// `None` if the ray is parallel to the plane or the plane lies behind
    /// the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    /// World-space hit point of `ray` on the plane.
    pub fn intersect_point(&self, ray: &Ray) -> Option<Vec3> {
        self.intersect(ray).map(|t| ray.point_at(t))
    }
}
