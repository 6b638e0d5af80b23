//! Gradient border crate.
//!
//! Paints rounded-rectangle backgrounds whose border ring and interior each
//! carry an independent linear gradient, onto any [`canvas::Canvas`].

pub mod coords;
pub mod paint;
pub mod canvas;
pub mod scene;
pub mod raster;
pub mod drawable;
pub mod border;

pub mod logging;

pub use border::{GradientBorderDrawable, RenderConfig};
pub use drawable::Drawable;
