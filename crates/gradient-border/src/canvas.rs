//! Drawing surface contract.
//!
//! A `Canvas` is whatever the host paints into: a GPU command stream, a
//! recorded [`DrawList`](crate::scene::DrawList), or a CPU
//! [`Pixmap`](crate::raster::Pixmap). Drawables only ever talk to this trait.

use crate::coords::Rect;
use crate::paint::PaintStyle;

pub trait Canvas {
    /// Strokes the outline of a rounded rectangle.
    ///
    /// The stroke is `paint.stroke_width` wide and centered on the outline, so
    /// it extends half its width on either side of `rect`'s edge.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle);

    /// Fills the interior of a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        (**self).stroke_rounded_rect(rect, radius, paint)
    }

    #[inline]
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        (**self).fill_rounded_rect(rect, radius, paint)
    }
}
