//! Command types for IPC messages.

mod path_edit;
mod tool;

pub use path_edit::*;
pub use tool::*;
