use std::fmt;
use std::rc::Rc;

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::drawable::{ColorFilter, Drawable, DrawableCallback, Opacity};
use crate::paint::{Color, GradientDirection, LinearGradient, PaintStyle};

use super::config::{GradientSpec, RenderConfig};

/// Interior radius that keeps the fill concentric with the border's inner edge.
#[inline]
pub fn inner_radius(corner: f32, border_width: f32) -> f32 {
    (corner - border_width * 0.5).max(0.0)
}

/// Rounded rectangle with a gradient border ring and a gradient interior.
///
/// The border is stroked on a path inset by half the border width, so the
/// ring spans exactly `[0, border_width]` inward from the bounds. The interior
/// is filled inside `bounds` inset by the full border width, with its corner
/// radius reduced by half the width so both edges meet without a gap.
///
/// Both brushes are derived from the bounds and rebuilt whenever the bounds,
/// colors, or directions change.
pub struct GradientBorderDrawable {
    config: RenderConfig,
    bounds: Rect,

    border_paint: PaintStyle,
    bg_paint: PaintStyle,

    callback: Option<Rc<dyn DrawableCallback>>,
    warned_degenerate: bool,
}

impl Default for GradientBorderDrawable {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for GradientBorderDrawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientBorderDrawable")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("border_paint", &self.border_paint)
            .field("bg_paint", &self.bg_paint)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl GradientBorderDrawable {
    pub fn new(config: RenderConfig) -> Self {
        let mut this = Self {
            config,
            bounds: Rect::default(),
            border_paint: PaintStyle::stroke(0.0),
            bg_paint: PaintStyle::fill(),
            callback: None,
            warned_degenerate: false,
        };
        this.apply_stroke_width();
        this.rebuild_brushes();
        this
    }

    /// Single-color border and background, default directions.
    pub fn solid(border_color: Color, bg_color: Color, border_width: f32, corner: f32) -> Self {
        Self::solid_with_directions(
            border_color,
            bg_color,
            border_width,
            corner,
            GradientDirection::default(),
            GradientDirection::default(),
        )
    }

    pub fn solid_with_directions(
        border_color: Color,
        bg_color: Color,
        border_width: f32,
        corner: f32,
        border_direction: GradientDirection,
        bg_direction: GradientDirection,
    ) -> Self {
        Self::new(RenderConfig {
            border: GradientSpec::solid(border_color, border_direction),
            background: GradientSpec::solid(bg_color, bg_direction),
            border_width,
            corner_radius: corner,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn border_paint(&self) -> &PaintStyle {
        &self.border_paint
    }

    #[inline]
    pub fn background_paint(&self) -> &PaintStyle {
        &self.bg_paint
    }

    /// Current paint alpha (shared by both paints).
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.border_paint.alpha()
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Resizes to `width` x `height` anchored at the origin.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.set_bounds_rect(Rect::from_size(width, height));
    }

    pub fn update_corner_radius(&mut self, radius: f32) {
        self.config.corner_radius = radius;
        self.invalidate_self();
    }

    pub fn update_border_width(&mut self, width: f32) {
        self.config.border_width = width;
        self.apply_stroke_width();
        self.invalidate_self();
    }

    pub fn set_border_colors(&mut self, colors: impl Into<Vec<Color>>) {
        self.config.border = GradientSpec::new(colors, self.config.border.direction());
        self.rebuild_brushes();
        self.invalidate_self();
    }

    pub fn set_background_colors(&mut self, colors: impl Into<Vec<Color>>) {
        self.config.background = GradientSpec::new(colors, self.config.background.direction());
        self.rebuild_brushes();
        self.invalidate_self();
    }

    pub fn set_border_direction(&mut self, direction: GradientDirection) {
        self.config.border = GradientSpec::new(self.config.border.colors(), direction);
        self.rebuild_brushes();
        self.invalidate_self();
    }

    pub fn set_background_direction(&mut self, direction: GradientDirection) {
        self.config.background = GradientSpec::new(self.config.background.colors(), direction);
        self.rebuild_brushes();
        self.invalidate_self();
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Border width used for geometry; non-positive widths draw no ring.
    #[inline]
    fn effective_width(&self) -> f32 {
        self.config.border_width.max(0.0)
    }

    /// Path the border stroke is centered on.
    pub fn border_rect(&self) -> Rect {
        self.bounds.inset(self.effective_width() * 0.5)
    }

    /// Area covered by the interior fill.
    pub fn fill_rect(&self) -> Rect {
        self.bounds.inset(self.effective_width())
    }

    pub fn fill_radius(&self) -> f32 {
        inner_radius(self.config.corner_radius, self.effective_width())
    }

    /// Brush for `spec` over the current bounds.
    pub fn build_gradient(&self, spec: &GradientSpec) -> LinearGradient {
        spec.brush(self.bounds)
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn apply_stroke_width(&mut self) {
        self.border_paint.stroke_width = self.config.border_width;
        self.bg_paint.stroke_width = self.config.border_width;
    }

    fn rebuild_brushes(&mut self) {
        log::trace!("rebuilding gradient brushes for bounds {:?}", self.bounds);

        let border = self.build_gradient(&self.config.border);
        let background = self.build_gradient(&self.config.background);

        // Zero-size bounds (before the first layout) are expected to be degenerate.
        if self.bounds.size != Vec2::zero()
            && !self.warned_degenerate
            && !(border.is_valid() && background.is_valid())
        {
            log::debug!("degenerate gradient axis for bounds {:?}; painting first color", self.bounds);
            self.warned_degenerate = true;
        }

        self.border_paint.shader = Some(border);
        self.bg_paint.shader = Some(background);
    }
}

impl Drawable for GradientBorderDrawable {
    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn on_bounds_change(&mut self, bounds: Rect) {
        log::debug!("gradient border bounds {:?} -> {:?}", self.bounds, bounds);
        self.bounds = bounds;
        self.rebuild_brushes();
        self.invalidate_self();
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.config.border_width > 0.0 {
            canvas.stroke_rounded_rect(self.border_rect(), self.config.corner_radius, &self.border_paint);
        }
        canvas.fill_rounded_rect(self.fill_rect(), self.fill_radius(), &self.bg_paint);
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.border_paint.set_alpha(alpha);
        self.bg_paint.set_alpha(alpha);
        self.invalidate_self();
    }

    /// Gradients may contain transparent colors, so this never claims opacity.
    #[inline]
    fn opacity(&self) -> Opacity {
        Opacity::Translucent
    }

    /// Color filters are not supported; the filter is ignored.
    #[inline]
    fn set_color_filter(&mut self, _filter: Option<ColorFilter>) {}

    #[inline]
    fn callback(&self) -> Option<&Rc<dyn DrawableCallback>> {
        self.callback.as_ref()
    }

    fn set_callback(&mut self, callback: Option<Rc<dyn DrawableCallback>>) {
        self.callback = callback;
    }

    #[inline]
    fn intrinsic_width(&self) -> i32 {
        self.bounds.width() as i32
    }

    #[inline]
    fn intrinsic_height(&self) -> i32 {
        self.bounds.height() as i32
    }
}
