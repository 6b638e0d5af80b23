//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store surface-agnostic draw commands
//! - preserve paint order (insertion order)
//! - replay recorded commands onto a live surface

mod cmd;
mod list;

pub use cmd::{DrawCmd, RoundedRectCmd};
pub use list::DrawList;
