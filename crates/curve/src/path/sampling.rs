//! Resolution-driven sampling and length estimation for CurvePath.
//!
//! `resolution` is the number of polyline steps per segment. It only affects
//! rendering density and the length estimate, never the editing operations.

use glam::Vec3;

use super::CurvePath;
use crate::error::CurveError;
use crate::types::CurveVertex;

impl CurvePath {
    /// World-space polyline for one segment: `resolution + 1` points from the
    /// start anchor to the end anchor inclusive.
    pub fn sample_segment(&self, segment: usize) -> Result<Vec<Vec3>, CurveError> {
        let steps = self.resolution;
        (0..=steps)
            .map(|i| self.evaluate(segment, i as f32 / steps as f32))
            .collect()
    }

    /// World-space polyline for the whole path.
    ///
    /// Shared endpoints between consecutive segments appear once; a closed
    /// path ends where it starts. Returns an empty list for paths without
    /// segments.
    pub fn sample_points(&self) -> Vec<Vec3> {
        let mut points = Vec::new();
        for segment in 0..self.segment_count() {
            let Ok(samples) = self.sample_segment(segment) else {
                continue;
            };
            let skip = usize::from(segment > 0);
            points.extend(samples.into_iter().skip(skip));
        }
        points
    }

    /// Position and tangent records for every sample of the path.
    pub fn sample_vertices(&self) -> Vec<CurveVertex> {
        let steps = self.resolution;
        let mut vertices = Vec::new();

        for segment in 0..self.segment_count() {
            let first = if segment == 0 { 0 } else { 1 };
            for i in first..=steps {
                let t = i as f32 / steps as f32;
                let (Ok(position), Ok(tangent)) =
                    (self.evaluate(segment, t), self.tangent_at(segment, t))
                else {
                    continue;
                };
                vertices.push(CurveVertex {
                    position: position.to_array(),
                    tangent: tangent.to_array(),
                });
            }
        }

        vertices
    }

    /// Polyline length of one segment at the path's resolution.
    pub fn segment_length(&self, segment: usize) -> Result<f32, CurveError> {
        let samples = self.sample_segment(segment)?;
        Ok(samples.windows(2).map(|w| w[0].distance(w[1])).sum())
    }

    /// Polyline length of the whole path; zero when there are no segments.
    pub fn approximate_length(&self) -> f32 {
        (0..self.segment_count())
            .filter_map(|segment| self.segment_length(segment).ok())
            .sum()
    }

    /// Position at global parameter `u` in `[0, 1]` spread over the whole
    /// path by approximate arc length.
    ///
    /// Within a segment the local parameter is linear in `u`, so speed varies
    /// with handle placement just like the segment itself.
    pub fn point_at(&self, u: f32) -> Result<Vec3, CurveError> {
        let segments = self.segment_count();
        if segments == 0 {
            return Err(CurveError::DegenerateSegment {
                count: self.len(),
                closed: self.is_closed(),
            });
        }

        let lengths: Vec<f32> = (0..segments)
            .map(|segment| self.segment_length(segment))
            .collect::<Result<_, _>>()?;
        let total: f32 = lengths.iter().sum();

        let u = u.clamp(0.0, 1.0);
        if total <= f32::EPSILON {
            return self.evaluate(0, u);
        }

        let target = u * total;
        let mut travelled = 0.0;
        for (segment, length) in lengths.iter().enumerate() {
            if travelled + length >= target && *length > 0.0 {
                return self.evaluate(segment, (target - travelled) / length);
            }
            travelled += length;
        }

        self.evaluate(segments - 1, 1.0)
    }
}
