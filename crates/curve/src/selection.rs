//! Anchor selection for multi-point editing.
//!
//! A [`SelectionSet`] holds anchor indices into one [`CurvePath`]. Indices are
//! only valid until the next structural edit of that path, so callers that
//! remove or reorder anchors must revalidate with the `remap_*` helpers.

use glam::{Vec2, Vec3};
use indexmap::IndexSet;
use tracing::debug;

use crate::error::CurveError;
use crate::path::CurvePath;

/// Axis-aligned screen-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    /// Rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Insertion-ordered set of selected anchor indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    indices: IndexSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index; returns `false` if it was already selected.
    pub fn add(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    /// Remove an index, keeping the order of the remaining members.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indices.shift_remove(&index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Mean local-frame position of the selected anchors.
    pub fn centroid(&self, path: &CurvePath) -> Result<Vec3, CurveError> {
        if self.indices.is_empty() {
            return Err(CurveError::EmptySelection);
        }

        let mut sum = Vec3::ZERO;
        for index in self.iter() {
            sum += path.anchor(index)?.position();
        }
        Ok(sum / self.indices.len() as f32)
    }

    /// Mean world-space position of the selected anchors.
    pub fn world_centroid(&self, path: &CurvePath) -> Result<Vec3, CurveError> {
        Ok(path.to_world(self.centroid(path)?))
    }

    /// Replace the selection with every anchor whose projected world position
    /// lies inside `rect`.
    ///
    /// `project` maps a world point to screen space and returns `None` for
    /// points that cannot be projected (e.g. behind the camera); those are
    /// never selected. Returns `true` if membership changed.
    pub fn region_filter<F>(&mut self, path: &CurvePath, rect: ScreenRect, project: F) -> bool
    where
        F: Fn(Vec3) -> Option<Vec2>,
    {
        let hits: IndexSet<usize> = path
            .anchors()
            .iter()
            .enumerate()
            .filter(|(_, anchor)| {
                project(path.to_world(anchor.position())).is_some_and(|p| rect.contains(p))
            })
            .map(|(index, _)| index)
            .collect();

        let changed = hits != self.indices;
        if changed {
            debug!("Region select: {} -> {} anchors", self.indices.len(), hits.len());
        }
        self.indices = hits;
        changed
    }

    /// Revalidate after `CurvePath::remove_at(removed)`.
    pub fn remap_after_remove(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&index| index != removed)
            .map(|&index| if index > removed { index - 1 } else { index })
            .collect();
    }

    /// Revalidate after `CurvePath::swap(a, b)`.
    pub fn remap_after_swap(&mut self, a: usize, b: usize) {
        self.indices = self
            .indices
            .iter()
            .map(|&index| match index {
                i if i == a => b,
                i if i == b => a,
                i => i,
            })
            .collect();
    }

    /// Revalidate after `CurvePath::insert_point_at(inserted, _)`.
    pub fn remap_after_insert(&mut self, inserted: usize) {
        self.indices = self
            .indices
            .iter()
            .map(|&index| if index >= inserted { index.saturating_add(1) } else { index })
            .collect();
    }

    /// Drop every index that is not valid for a path of `count` anchors.
    pub fn retain_valid(&mut self, count: usize) {
        self.indices.retain(|&index| index < count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_path() -> CurvePath {
        let mut path = CurvePath::new();
        path.add_point_at(Vec3::new(0.0, 0.0, 0.0));
        path.add_point_at(Vec3::new(10.0, 0.0, 0.0));
        path.add_point_at(Vec3::new(5.0, 0.0, 10.0));
        path
    }

    /// Top-down orthographic projection: screen = (x, z)
    fn top_down(p: Vec3) -> Option<Vec2> {
        Some(Vec2::new(p.x, p.z))
    }

    #[test]
    fn test_centroid_of_three_anchors() {
        let path = triangle_path();
        let mut selection = SelectionSet::new();
        selection.add(0);
        selection.add(1);
        selection.add(2);

        let centroid = selection.centroid(&path).unwrap();
        assert!((centroid - Vec3::new(5.0, 0.0, 10.0 / 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_centroid_empty_selection() {
        let path = triangle_path();
        let selection = SelectionSet::new();
        assert_eq!(selection.centroid(&path), Err(CurveError::EmptySelection));
    }

    #[test]
    fn test_centroid_stale_index() {
        let path = triangle_path();
        let mut selection = SelectionSet::new();
        selection.add(5);
        assert_eq!(
            selection.centroid(&path),
            Err(CurveError::IndexOutOfRange { index: 5, count: 3 })
        );
    }

    #[test]
    fn test_add_remove_contains() {
        let mut selection = SelectionSet::new();
        assert!(selection.add(2));
        assert!(!selection.add(2));
        assert!(selection.add(0));
        assert_eq!(selection.to_vec(), vec![2, 0]);

        assert!(selection.remove(2));
        assert!(!selection.contains(2));
        assert!(selection.contains(0));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_region_filter_replaces_contents() {
        let path = triangle_path();
        let mut selection = SelectionSet::new();
        selection.add(2);

        let rect = ScreenRect::from_corners(Vec2::new(-1.0, -1.0), Vec2::new(11.0, 1.0));
        assert!(selection.region_filter(&path, rect, top_down));

        assert_eq!(selection.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_region_filter_idempotent() {
        let path = triangle_path();
        let mut selection = SelectionSet::new();
        let rect = ScreenRect::from_corners(Vec2::new(4.0, 11.0), Vec2::new(11.0, -1.0));

        selection.region_filter(&path, rect, top_down);
        let first = selection.clone();
        assert!(!selection.region_filter(&path, rect, top_down));
        assert_eq!(selection, first);
        assert_eq!(selection.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_region_filter_skips_unprojectable() {
        let path = triangle_path();
        let mut selection = SelectionSet::new();
        let rect = ScreenRect::from_corners(Vec2::splat(-100.0), Vec2::splat(100.0));

        selection.region_filter(&path, rect, |p| (p.z < 5.0).then(|| Vec2::new(p.x, p.z)));
        assert_eq!(selection.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_region_filter_uses_world_positions() {
        let mut path = triangle_path();
        path.center_pivot();
        let mut selection = SelectionSet::new();

        let rect = ScreenRect::from_corners(Vec2::new(9.0, -1.0), Vec2::new(11.0, 1.0));
        selection.region_filter(&path, rect, top_down);
        assert_eq!(selection.to_vec(), vec![1]);
    }

    #[test]
    fn test_remap_after_remove() {
        let mut selection = SelectionSet::new();
        selection.add(0);
        selection.add(2);
        selection.add(3);

        selection.remap_after_remove(2);
        assert_eq!(selection.to_vec(), vec![0, 2]);
    }

    #[test]
    fn test_remap_after_swap_and_insert() {
        let mut selection = SelectionSet::new();
        selection.add(1);
        selection.add(4);

        selection.remap_after_swap(1, 2);
        assert_eq!(selection.to_vec(), vec![2, 4]);

        selection.remap_after_insert(3);
        assert_eq!(selection.to_vec(), vec![2, 5]);

        selection.retain_valid(5);
        assert_eq!(selection.to_vec(), vec![2]);
    }

    #[test]
    fn test_screen_rect_normalizes_corners() {
        let rect = ScreenRect::from_corners(Vec2::new(5.0, 5.0), Vec2::new(1.0, 2.0));
        assert_eq!(rect.min, Vec2::new(1.0, 2.0));
        assert_eq!(rect.max, Vec2::new(5.0, 5.0));
        assert!(rect.contains(Vec2::new(1.0, 5.0)));
        assert!(!rect.contains(Vec2::new(0.9, 3.0)));
    }
}
