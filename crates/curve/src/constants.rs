/// Default handle length for newly created anchors and style repairs.
pub const DEFAULT_HANDLE_LENGTH: f32 = 0.1;

/// Default number of samples per segment.
pub const DEFAULT_RESOLUTION: u32 = 30;

/// Squared length below which a vector counts as zero.
pub const ZERO_VECTOR_EPSILON: f32 = 1e-10;

/// Dot-product slack for treating a rotation as identity.
pub const IDENTITY_ROTATION_EPSILON: f32 = 1e-6;
