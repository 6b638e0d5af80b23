//! Geometry types shared by the paint model, surfaces and drawables.
//!
//! Canonical space:
//! - device-independent units (the host converts to physical pixels)
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
