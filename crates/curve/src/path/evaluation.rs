//! Segment evaluation for CurvePath.

use glam::Vec3;

use super::CurvePath;
use crate::constants::ZERO_VECTOR_EPSILON;
use crate::error::CurveError;

/// Evaluate a cubic Bezier with control points `p0..p3` at `t`.
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// First derivative of a cubic Bezier at `t` (not normalized).
pub fn cubic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

impl CurvePath {
    /// Number of cubic segments: `len - 1` when open, `len` when closed.
    pub fn segment_count(&self) -> usize {
        let count = self.anchors.len();
        if self.closed {
            count
        } else {
            count.saturating_sub(1)
        }
    }

    /// World-space control points `[p0, p1, p2, p3]` of a segment.
    ///
    /// Segment `i` runs from anchor `i` (using its outgoing handle) to anchor
    /// `i + 1` (using its incoming handle), wrapping on closed paths.
    pub fn segment_controls(&self, segment: usize) -> Result<[Vec3; 4], CurveError> {
        let segments = self.segment_count();
        if segments == 0 {
            return Err(CurveError::DegenerateSegment {
                count: self.anchors.len(),
                closed: self.closed,
            });
        }
        if segment >= segments {
            return Err(CurveError::IndexOutOfRange {
                index: segment,
                count: segments,
            });
        }

        let start = &self.anchors[segment];
        let end = &self.anchors[(segment + 1) % self.anchors.len()];

        Ok([
            self.to_world(start.position()),
            self.to_world(start.global_handle2()),
            self.to_world(end.global_handle1()),
            self.to_world(end.position()),
        ])
    }

    /// World-space position on a segment; `t` is clamped to `[0, 1]`.
    pub fn evaluate(&self, segment: usize, t: f32) -> Result<Vec3, CurveError> {
        let [p0, p1, p2, p3] = self.segment_controls(segment)?;
        Ok(cubic_bezier(p0, p1, p2, p3, t.clamp(0.0, 1.0)))
    }

    /// Normalized tangent on a segment.
    ///
    /// Where the derivative vanishes (a handle coincides with its anchor) the
    /// segment's chord direction is returned instead; a zero-length segment
    /// yields the zero vector.
    pub fn tangent_at(&self, segment: usize, t: f32) -> Result<Vec3, CurveError> {
        let [p0, p1, p2, p3] = self.segment_controls(segment)?;
        let derivative = cubic_bezier_derivative(p0, p1, p2, p3, t.clamp(0.0, 1.0));

        if derivative.length_squared() > ZERO_VECTOR_EPSILON {
            Ok(derivative.normalize())
        } else {
            Ok((p3 - p0).normalize_or_zero())
        }
    }
}
