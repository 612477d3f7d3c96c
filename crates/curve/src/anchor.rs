//! Anchor points and handle coupling.
//!
//! An anchor stores its two tangent handles as offsets from its position, so
//! moving the anchor carries the handles along. The [`HandleStyle`] decides how
//! writing one handle affects the other.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_HANDLE_LENGTH, ZERO_VECTOR_EPSILON};

/// How the two handles of an anchor are coupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleStyle {
    /// Both handles are pinned to zero (sharp corner)
    None,
    /// Handles are mirrored: `handle2 == -handle1`
    #[default]
    Connected,
    /// Handles move independently
    Broken,
}

/// Which handle of an anchor is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleSide {
    /// Incoming handle (shapes the segment ending at this anchor)
    First,
    /// Outgoing handle (shapes the segment starting at this anchor)
    Second,
}

fn is_zero(v: Vec3) -> bool {
    v.length_squared() <= ZERO_VECTOR_EPSILON
}

/// A control vertex of a composite cubic Bezier curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorPoint {
    position: Vec3,
    handle1: Vec3,
    handle2: Vec3,
    handle_style: HandleStyle,
}

impl AnchorPoint {
    /// Create a `Connected` anchor with the default handle pair along X.
    pub fn new(position: Vec3) -> Self {
        Self::with_handle_length(position, DEFAULT_HANDLE_LENGTH)
    }

    /// Create a `Connected` anchor whose handles are `(length, 0, 0)` and
    /// `(-length, 0, 0)`.
    pub fn with_handle_length(position: Vec3, length: f32) -> Self {
        Self {
            position,
            handle1: Vec3::new(length, 0.0, 0.0),
            handle2: Vec3::new(-length, 0.0, 0.0),
            handle_style: HandleStyle::Connected,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Move the anchor by `delta`; handles follow because they are offsets.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn handle1(&self) -> Vec3 {
        self.handle1
    }

    pub fn handle2(&self) -> Vec3 {
        self.handle2
    }

    pub fn handle(&self, side: HandleSide) -> Vec3 {
        match side {
            HandleSide::First => self.handle1,
            HandleSide::Second => self.handle2,
        }
    }

    pub fn global_handle1(&self) -> Vec3 {
        self.position + self.handle1
    }

    pub fn global_handle2(&self) -> Vec3 {
        self.position + self.handle2
    }

    pub fn handle_style(&self) -> HandleStyle {
        self.handle_style
    }

    /// Write the first handle, honouring the coupling rule.
    ///
    /// Returns `false` when the write was rejected (`None` style).
    pub fn set_handle1(&mut self, handle: Vec3) -> bool {
        self.set_handle(HandleSide::First, handle)
    }

    /// Write the second handle, honouring the coupling rule.
    ///
    /// Returns `false` when the write was rejected (`None` style).
    pub fn set_handle2(&mut self, handle: Vec3) -> bool {
        self.set_handle(HandleSide::Second, handle)
    }

    /// Write either handle. Under `Connected` the opposite handle becomes the
    /// negation within the same call.
    pub fn set_handle(&mut self, side: HandleSide, handle: Vec3) -> bool {
        match self.handle_style {
            HandleStyle::None => {
                warn!("Ignoring {:?} handle write on anchor with no handles", side);
                false
            }
            HandleStyle::Connected => {
                match side {
                    HandleSide::First => {
                        self.handle1 = handle;
                        self.handle2 = -handle;
                    }
                    HandleSide::Second => {
                        self.handle2 = handle;
                        self.handle1 = -handle;
                    }
                }
                true
            }
            HandleStyle::Broken => {
                match side {
                    HandleSide::First => self.handle1 = handle,
                    HandleSide::Second => self.handle2 = handle,
                }
                true
            }
        }
    }

    pub fn set_global_handle1(&mut self, point: Vec3) -> bool {
        self.set_handle1(point - self.position)
    }

    pub fn set_global_handle2(&mut self, point: Vec3) -> bool {
        self.set_handle2(point - self.position)
    }

    /// Switch handle style and repair the handles so the new style's
    /// invariant holds.
    ///
    /// - `Connected`: mirror whichever handle is non-zero (handle1 wins),
    ///   or fall back to the default pair.
    /// - `Broken`: if both handles are zero, use the default pair so the
    ///   handles stay visible.
    /// - `None`: zero both handles.
    pub fn set_handle_style(&mut self, style: HandleStyle) {
        self.set_handle_style_with_length(style, DEFAULT_HANDLE_LENGTH);
    }

    /// Same as [`Self::set_handle_style`] with an explicit fallback length.
    pub fn set_handle_style_with_length(&mut self, style: HandleStyle, length: f32) {
        let default_pair = (Vec3::new(length, 0.0, 0.0), Vec3::new(-length, 0.0, 0.0));

        match style {
            HandleStyle::Connected => {
                if !is_zero(self.handle1) {
                    self.handle2 = -self.handle1;
                } else if !is_zero(self.handle2) {
                    self.handle1 = -self.handle2;
                } else {
                    (self.handle1, self.handle2) = default_pair;
                }
            }
            HandleStyle::Broken => {
                if is_zero(self.handle1) && is_zero(self.handle2) {
                    (self.handle1, self.handle2) = default_pair;
                }
            }
            HandleStyle::None => {
                self.handle1 = Vec3::ZERO;
                self.handle2 = Vec3::ZERO;
            }
        }

        self.handle_style = style;
    }
}
