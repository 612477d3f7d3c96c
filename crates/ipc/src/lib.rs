//! IPC message protocol for the curve editor
//!
//! Defines the message types exchanged between a host application (which owns
//! windowing, picking, rendering and undo) and the curve editing core.

pub mod commands;
pub mod error;
pub mod input;
pub mod messages;

pub use commands::*;
pub use error::*;
pub use input::*;
pub use messages::*;
