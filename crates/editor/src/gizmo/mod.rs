//! Group gizmo for multi-anchor editing
//!
//! The host owns the actual translate/rotate handles and reports where they
//! went. This module turns those reports into rigid edits of the selected
//! anchors:
//! - Translate: the gizmo sits at the selection's world centroid; moving it
//!   shifts every selected anchor by the same amount
//! - Rotate: the gizmo reports an accumulated rotation; only the change since
//!   the previous report is applied, about the selection centroid

mod state;
mod transform;

pub use state::GroupGizmoState;
pub use transform::{is_identity_rotation, rotate_selection, translate_selection};
