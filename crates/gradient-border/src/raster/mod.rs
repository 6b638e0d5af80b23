//! CPU rasterizer surface.
//!
//! `Pixmap` implements [`Canvas`](crate::canvas::Canvas) by evaluating
//! rounded-rect signed distance fields per pixel, so drawables can be
//! rendered without a GPU (previews, snapshots, tests).

mod pixmap;
mod sdf;

pub use pixmap::{Pixmap, PremulRgba, RasterError, MAX_DIMENSION};
