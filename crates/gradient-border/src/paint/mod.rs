//! Paint model shared between drawables and surfaces.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - linear gradient brushes and their sampling
//! - paint styles (fill / stroke, alpha, shader)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod style;

pub use color::Color;
pub use gradient::{ColorStop, GradientDirection, LinearGradient, SpreadMode};
pub use style::{PaintStyle, Style};
