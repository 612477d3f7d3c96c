use serde::{Deserialize, Serialize};

/// A sampled point on the curve, ready for upload to a line renderer.
///
/// This struct is designed for GPU compatibility with bytemuck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct CurveVertex {
    /// World-space position
    pub position: [f32; 3],
    /// Normalized world-space tangent (zero on degenerate segments)
    pub tangent: [f32; 3],
}
