use crate::coords::Vec2;

use super::{Color, LinearGradient};

/// Whether a shape is filled or outlined.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Style {
    /// Paint the interior of the shape.
    #[default]
    Fill,
    /// Paint a band of `stroke_width` centered on the shape outline.
    Stroke,
}

/// How a shape is painted: style, stroke width, and the color source.
///
/// The paint color's alpha channel doubles as the paint alpha: when a shader
/// is attached, its sampled alpha is scaled by it and its hue is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub style: Style,
    pub stroke_width: f32,
    pub color: Color,
    pub shader: Option<LinearGradient>,
    pub anti_alias: bool,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            style: Style::Fill,
            stroke_width: 0.0,
            color: Color::BLACK,
            shader: None,
            anti_alias: true,
        }
    }
}

impl PaintStyle {
    #[inline]
    pub fn fill() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stroke(width: f32) -> Self {
        Self {
            style: Style::Stroke,
            stroke_width: width,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_shader(mut self, shader: LinearGradient) -> Self {
        self.shader = Some(shader);
        self
    }

    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.color.a
    }

    /// Replaces the alpha channel of the paint color.
    #[inline]
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color = self.color.with_alpha(alpha);
    }

    /// Effective straight-alpha color at `p`.
    pub fn color_at(&self, p: Vec2) -> Color {
        match &self.shader {
            Some(shader) => shader.sample(p).modulate_alpha(self.color.a),
            None => self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::SpreadMode;

    fn ramp() -> LinearGradient {
        LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(100.0, 0.0),
            &[Color::RED, Color::BLUE],
            SpreadMode::Pad,
        )
    }

    #[test]
    fn solid_paint_uses_its_color() {
        let p = PaintStyle::fill().with_color(Color::GREEN);
        assert_eq!(p.color_at(Vec2::new(3.0, 4.0)), Color::GREEN);
    }

    #[test]
    fn shader_overrides_color_hue() {
        let p = PaintStyle::fill().with_color(Color::GREEN).with_shader(ramp());
        assert_eq!(p.color_at(Vec2::zero()), Color::RED);
    }

    #[test]
    fn alpha_modulates_shader_output() {
        let mut p = PaintStyle::stroke(4.0).with_shader(ramp());
        p.set_alpha(128);
        assert_eq!(p.alpha(), 128);
        assert_eq!(p.color_at(Vec2::zero()), Color::RED.with_alpha(128));
        assert_eq!(p.shader.as_ref().map(|s| s.stops[0].color), Some(Color::RED));
    }
}
