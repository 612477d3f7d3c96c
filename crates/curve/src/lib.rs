//! Curve editing core - anchor, path and selection data structures
//!
//! This crate provides the geometry and bookkeeping behind the curve editor:
//! - [`anchor::AnchorPoint`] - A control vertex with two coupled tangent handles
//! - [`path::CurvePath`] - Ordered (optionally closed) composite cubic Bezier
//! - [`selection::SelectionSet`] - Ordered index set with centroid and region filtering
//! - [`raycast`] - Ray/plane helpers used to place points on a ground plane
//! - [`types`] - GPU-compatible sample records for host renderers

pub mod anchor;
pub mod constants;
pub mod error;
pub mod path;
pub mod raycast;
pub mod selection;
pub mod types;

pub use anchor::*;
pub use constants::*;
pub use error::*;
pub use path::*;
pub use raycast::*;
pub use selection::*;
pub use types::*;
