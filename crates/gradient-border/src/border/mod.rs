//! Gradient border background.
//!
//! [`GradientBorderDrawable`] paints a rounded rectangle whose border ring and
//! interior each carry their own linear gradient.

mod config;
mod drawable;

pub use config::{
    GradientSpec, RenderConfig, DEFAULT_BORDER_WIDTH, DEFAULT_COLOR, DEFAULT_COLORS, DEFAULT_CORNER,
};
pub use drawable::{inner_radius, GradientBorderDrawable};
