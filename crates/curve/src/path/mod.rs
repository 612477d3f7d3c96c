//! Composite cubic Bezier path made of anchor points.
//!
//! Anchors are stored in a flat arena; an anchor's index is its handle until
//! the next structural edit (insert, remove, swap). Anchor positions live in
//! the path's local frame, which is offset from world space by [`CurvePath::origin`].

mod evaluation;
mod sampling;

use glam::Vec3;
use serde::Serialize;
use tracing::{debug, info};

use crate::anchor::{AnchorPoint, HandleSide};
use crate::constants::{DEFAULT_HANDLE_LENGTH, DEFAULT_RESOLUTION};
use crate::error::CurveError;

pub use evaluation::{cubic_bezier, cubic_bezier_derivative};

/// A draggable control on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorControl {
    Anchor,
    Handle(HandleSide),
}

/// Ordered collection of anchors forming an open or closed composite curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePath {
    anchors: Vec<AnchorPoint>,
    closed: bool,
    resolution: u32,
    origin: Vec3,
    handle_length: f32,
}

impl Default for CurvePath {
    fn default() -> Self {
        Self::new()
    }
}

impl CurvePath {
    /// Create an empty open path at the world origin.
    pub fn new() -> Self {
        Self {
            anchors: Vec::new(),
            closed: false,
            resolution: DEFAULT_RESOLUTION,
            origin: Vec3::ZERO,
            handle_length: DEFAULT_HANDLE_LENGTH,
        }
    }

    /// Create an empty path whose outer frame sits at `origin`.
    pub fn with_origin(origin: Vec3) -> Self {
        Self {
            origin,
            ..Self::new()
        }
    }

    /// Set the handle length given to new anchors.
    pub fn with_handle_length(mut self, length: f32) -> Self {
        self.handle_length = length;
        self
    }

    /// Set samples per segment (clamped to at least 1).
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.set_resolution(resolution);
        self
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = resolution.max(1);
    }

    /// Translation of the path's local frame in world space.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    pub fn handle_length(&self) -> f32 {
        self.handle_length
    }

    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    pub fn anchor(&self, index: usize) -> Result<&AnchorPoint, CurveError> {
        let count = self.anchors.len();
        self.anchors
            .get(index)
            .ok_or(CurveError::IndexOutOfRange { index, count })
    }

    pub fn anchor_mut(&mut self, index: usize) -> Result<&mut AnchorPoint, CurveError> {
        let count = self.anchors.len();
        self.anchors
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange { index, count })
    }

    pub fn last(&self) -> Option<&AnchorPoint> {
        self.anchors.last()
    }

    /// Convert a world-space point into the path's local frame.
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        world - self.origin
    }

    /// Convert a local-frame point into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local + self.origin
    }

    /// World-space position of an anchor.
    pub fn world_position(&self, index: usize) -> Result<Vec3, CurveError> {
        Ok(self.to_world(self.anchor(index)?.position()))
    }

    /// Append a `Connected` anchor at a world-space position.
    ///
    /// Returns the new anchor's index.
    pub fn add_point_at(&mut self, world: Vec3) -> usize {
        let anchor = AnchorPoint::with_handle_length(self.to_local(world), self.handle_length);
        self.anchors.push(anchor);
        let index = self.anchors.len() - 1;
        debug!("Added anchor {} at {:?}", index, world);
        index
    }

    /// Insert a `Connected` anchor before `index` (`index == len` appends).
    pub fn insert_point_at(&mut self, index: usize, world: Vec3) -> Result<usize, CurveError> {
        let count = self.anchors.len();
        if index > count {
            return Err(CurveError::IndexOutOfRange { index, count });
        }
        let anchor = AnchorPoint::with_handle_length(self.to_local(world), self.handle_length);
        self.anchors.insert(index, anchor);
        debug!("Inserted anchor {} at {:?}", index, world);
        Ok(index)
    }

    /// Remove an anchor; later indices shift down by one.
    ///
    /// Selections referring to this path are not updated here.
    pub fn remove_at(&mut self, index: usize) -> Result<AnchorPoint, CurveError> {
        let count = self.anchors.len();
        if index >= count {
            return Err(CurveError::IndexOutOfRange { index, count });
        }
        debug!("Removing anchor {} of {}", index, count);
        Ok(self.anchors.remove(index))
    }

    /// Exchange the order of two anchors without touching their geometry.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), CurveError> {
        let count = self.anchors.len();
        for index in [a, b] {
            if index >= count {
                return Err(CurveError::IndexOutOfRange { index, count });
            }
        }
        self.anchors.swap(a, b);
        debug!("Swapped anchors {} and {}", a, b);
        Ok(())
    }

    /// Swap an anchor with its predecessor. Returns the anchor's new index.
    pub fn move_up(&mut self, index: usize) -> Result<usize, CurveError> {
        if index == 0 || index >= self.anchors.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                count: self.anchors.len(),
            });
        }
        self.swap(index - 1, index)?;
        Ok(index - 1)
    }

    /// Swap an anchor with its successor. Returns the anchor's new index.
    pub fn move_down(&mut self, index: usize) -> Result<usize, CurveError> {
        if index >= self.anchors.len().saturating_sub(1) {
            return Err(CurveError::IndexOutOfRange {
                index,
                count: self.anchors.len(),
            });
        }
        self.swap(index, index + 1)?;
        Ok(index + 1)
    }

    /// Move an anchor or one of its handles to a world-space point.
    ///
    /// Returns `false` when a handle drag was rejected by the anchor's style.
    pub fn drag_control(
        &mut self,
        index: usize,
        control: AnchorControl,
        world: Vec3,
    ) -> Result<bool, CurveError> {
        let local = self.to_local(world);
        let anchor = self.anchor_mut(index)?;
        let applied = match control {
            AnchorControl::Anchor => {
                anchor.set_position(local);
                true
            }
            AnchorControl::Handle(side) => {
                let offset = local - anchor.position();
                anchor.set_handle(side, offset)
            }
        };
        Ok(applied)
    }

    /// Arithmetic mean of all anchor positions in the local frame.
    pub fn centroid(&self) -> Option<Vec3> {
        if self.anchors.is_empty() {
            return None;
        }
        let sum: Vec3 = self.anchors.iter().map(AnchorPoint::position).sum();
        Some(sum / self.anchors.len() as f32)
    }

    /// Re-base anchor positions on their centroid.
    ///
    /// Every anchor moves by `-C` and the origin moves by `+C`, so the
    /// world-space curve is unchanged. Returns `C`.
    pub fn center_pivot(&mut self) -> Vec3 {
        let Some(center) = self.centroid() else {
            return Vec3::ZERO;
        };

        for anchor in &mut self.anchors {
            anchor.translate(-center);
        }
        self.origin += center;

        info!("Centered pivot by {:?} (origin now {:?})", center, self.origin);
        center
    }
}
