use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::PaintStyle;

use super::cmd::{DrawCmd, RoundedRectCmd};

/// Recorded draw stream.
///
/// Commands are kept in insertion order, which is paint order (back-to-front).
/// A list can be inspected directly or replayed onto any other [`Canvas`].
///
/// ```ignore
/// let mut list = DrawList::new();
/// drawable.draw(&mut list);
/// list.replay(&mut pixmap);
/// ```
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Issues every recorded command to `canvas`, in paint order.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for cmd in &self.items {
            match cmd {
                DrawCmd::StrokeRoundedRect(c) => canvas.stroke_rounded_rect(c.rect, c.radius, &c.paint),
                DrawCmd::FillRoundedRect(c) => canvas.fill_rounded_rect(c.rect, c.radius, &c.paint),
            }
        }
    }
}

impl Canvas for DrawList {
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        self.push(DrawCmd::StrokeRoundedRect(RoundedRectCmd::new(rect, radius, paint.clone())));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        self.push(DrawCmd::FillRoundedRect(RoundedRectCmd::new(rect, radius, paint.clone())));
    }
}
