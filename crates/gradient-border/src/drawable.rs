//! Host-facing drawable contract.
//!
//! A drawable is something a view can use as its background: it knows its
//! bounds, paints itself onto a [`Canvas`], and asks the host to redraw it
//! through a [`DrawableCallback`] when its appearance changes.

use std::rc::Rc;

use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::Color;

/// Receives redraw requests from a drawable.
///
/// Implemented by the host view. Any `Fn()` closure works as a callback.
pub trait DrawableCallback {
    fn invalidate_drawable(&self);
}

impl<F: Fn()> DrawableCallback for F {
    #[inline]
    fn invalidate_drawable(&self) {
        self()
    }
}

/// Coarse opacity hint reported to the host compositor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Opacity {
    /// Every pixel in bounds is fully opaque.
    Opaque,
    /// Some pixels may be partially transparent.
    Translucent,
    /// Nothing is drawn.
    Transparent,
}

/// Blend mode of a [`ColorFilter`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FilterMode {
    #[default]
    SrcIn,
    Multiply,
}

/// Color filter descriptor handed over by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorFilter {
    pub color: Color,
    pub mode: FilterMode,
}

impl ColorFilter {
    #[inline]
    pub const fn new(color: Color, mode: FilterMode) -> Self {
        Self { color, mode }
    }
}

pub trait Drawable {
    /// Current bounds.
    fn bounds(&self) -> Rect;

    /// Stores `bounds` and rebuilds whatever depends on them.
    fn on_bounds_change(&mut self, bounds: Rect);

    /// Paints the drawable onto `canvas` within its bounds.
    fn draw(&self, canvas: &mut dyn Canvas);

    fn set_alpha(&mut self, alpha: u8);

    fn opacity(&self) -> Opacity;

    fn set_color_filter(&mut self, filter: Option<ColorFilter>);

    fn callback(&self) -> Option<&Rc<dyn DrawableCallback>>;

    fn set_callback(&mut self, callback: Option<Rc<dyn DrawableCallback>>);

    /// Replaces the bounds, notifying [`Drawable::on_bounds_change`] only if they differ.
    fn set_bounds_rect(&mut self, bounds: Rect) {
        if self.bounds() != bounds {
            self.on_bounds_change(bounds);
        }
    }

    /// Asks the host to redraw. No-op without a callback.
    fn invalidate_self(&self) {
        if let Some(cb) = self.callback() {
            cb.invalidate_drawable();
        }
    }

    /// Preferred width, or `-1` when the drawable has none.
    fn intrinsic_width(&self) -> i32 {
        -1
    }

    /// Preferred height, or `-1` when the drawable has none.
    fn intrinsic_height(&self) -> i32 {
        -1
    }
}
