use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::{Color, PaintStyle, Style};

use super::sdf;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Error returned when a pixel buffer cannot be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero.
    ZeroSize { width: u32, height: u32 },
    /// Width or height exceeds [`MAX_DIMENSION`].
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::ZeroSize { width, height } => {
                write!(f, "pixmap size {width}x{height} has a zero dimension")
            }
            RasterError::TooLarge { width, height } => {
                write!(f, "pixmap size {width}x{height} exceeds {MAX_DIMENSION}px per side")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Premultiplied RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PremulRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PremulRgba {
    /// Converts back to a straight-alpha color.
    pub fn demultiply(self) -> Color {
        if self.a == 0 {
            return Color::TRANSPARENT;
        }
        let un = |c: u8| ((c as u32 * 255 + self.a as u32 / 2) / self.a as u32).min(255) as u8;
        Color::from_rgba(un(self.r), un(self.g), un(self.b), self.a)
    }
}

/// CPU raster surface: a row-major premultiplied RGBA8 buffer.
///
/// One canvas unit maps to one pixel. Shapes are rasterized from signed
/// distance fields and composited source-over; paints are evaluated at pixel
/// centers.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<PremulRgba>,
}

impl Pixmap {
    /// Allocates a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroSize { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RasterError::TooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![PremulRgba::default(); width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes, 4 per pixel.
    #[inline]
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Straight-alpha RGBA8 bytes, the layout most image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.r, c.g, c.b, c.a]
            })
            .collect()
    }

    /// Fills every pixel with `color`, replacing existing content.
    pub fn clear(&mut self, color: Color) {
        let px = to_premul_u8(color.to_premul_f32());
        self.pixels.fill(px);
    }

    /// Rasterizes a shape described by a signed distance function.
    fn rasterize(&mut self, bounds: Rect, paint: &PaintStyle, distance: impl Fn(Vec2) -> f32) {
        if !bounds.is_finite() || bounds.is_empty() {
            return;
        }

        // One pixel of slack for the anti-aliasing ramp.
        let x0 = (bounds.origin.x - 1.0).floor().max(0.0) as u32;
        let y0 = (bounds.origin.y - 1.0).floor().max(0.0) as u32;
        let x1 = ((bounds.max().x + 1.0).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((bounds.max().y + 1.0).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let cov = sdf::coverage(distance(p), paint.anti_alias);
                if cov <= 0.0 {
                    continue;
                }
                let src = paint.color_at(p).to_premul_f32();
                let idx = (y * self.width + x) as usize;
                self.pixels[idx] = blend_src_over(self.pixels[idx], src, cov);
            }
        }
    }
}

impl Canvas for Pixmap {
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        debug_assert_eq!(paint.style, Style::Stroke, "stroke drawn with a fill paint");
        let width = paint.stroke_width;
        if width <= 0.0 || !width.is_finite() || !radius.is_finite() {
            return;
        }
        let bounds = rect.inset(-width * 0.5);
        self.rasterize(bounds, paint, |p| sdf::rounded_rect_ring(p, rect, radius, width));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &PaintStyle) {
        debug_assert_eq!(paint.style, Style::Fill, "fill drawn with a stroke paint");
        if !radius.is_finite() {
            return;
        }
        self.rasterize(rect, paint, |p| sdf::rounded_rect(p, rect, radius));
    }
}

// ── compositing ───────────────────────────────────────────────────────────

/// Premultiplied source-over: `out = src * cov + dst * (1 - src.a * cov)`.
fn blend_src_over(dst: PremulRgba, src: [f32; 4], cov: f32) -> PremulRgba {
    let [sr, sg, sb, sa] = src.map(|c| c * cov);
    let inv = 1.0 - sa;
    let d = [dst.r, dst.g, dst.b, dst.a].map(|c| c as f32 / 255.0);
    to_premul_u8([sr + d[0] * inv, sg + d[1] * inv, sb + d[2] * inv, sa + d[3] * inv])
}

fn to_premul_u8(c: [f32; 4]) -> PremulRgba {
    let q = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    PremulRgba { r: q(c[0]), g: q(c[1]), b: q(c[2]), a: q(c[3]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{LinearGradient, SpreadMode};

    fn straight(pm: &Pixmap, x: u32, y: u32) -> Color {
        pm.pixel(x, y).map(PremulRgba::demultiply).unwrap_or_default()
    }

    // ── allocation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_zero_and_oversized() {
        assert_eq!(
            Pixmap::new(0, 10).unwrap_err(),
            RasterError::ZeroSize { width: 0, height: 10 }
        );
        assert!(matches!(
            Pixmap::new(MAX_DIMENSION + 1, 1),
            Err(RasterError::TooLarge { .. })
        ));
    }

    #[test]
    fn starts_transparent_and_exposes_bytes() {
        let pm = Pixmap::new(3, 2).unwrap();
        assert_eq!(pm.data().len(), 3 * 2 * 4);
        assert!(pm.data().iter().all(|&b| b == 0));
        assert_eq!(pm.pixel(3, 0), None);
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_covers_interior_only() {
        let mut pm = Pixmap::new(20, 20).unwrap();
        let paint = PaintStyle::fill().with_color(Color::RED);
        pm.fill_rounded_rect(Rect::new(5.0, 5.0, 10.0, 10.0), 0.0, &paint);

        assert_eq!(straight(&pm, 10, 10), Color::RED);
        assert_eq!(straight(&pm, 5, 5), Color::RED);
        assert_eq!(straight(&pm, 2, 10).a, 0);
        assert_eq!(straight(&pm, 15, 10).a, 0);
    }

    #[test]
    fn rounded_corner_pixel_is_left_empty() {
        let mut pm = Pixmap::new(40, 40).unwrap();
        let paint = PaintStyle::fill().with_color(Color::BLUE);
        pm.fill_rounded_rect(Rect::from_size(40.0, 40.0), 12.0, &paint);

        assert_eq!(straight(&pm, 0, 0).a, 0);
        assert_eq!(straight(&pm, 20, 0), Color::BLUE);
    }

    #[test]
    fn gradient_fill_samples_at_pixel_centers() {
        let mut pm = Pixmap::new(200, 4).unwrap();
        let g = LinearGradient::evenly_spaced(
            Vec2::zero(),
            Vec2::new(200.0, 0.0),
            &[Color::RED, Color::BLUE],
            SpreadMode::Pad,
        );
        pm.fill_rounded_rect(Rect::from_size(200.0, 4.0), 0.0, &PaintStyle::fill().with_shader(g));

        let left = straight(&pm, 0, 2);
        let right = straight(&pm, 199, 2);
        assert!(left.r >= 254 && left.b <= 1);
        assert!(right.b >= 254 && right.r <= 1);
        let mid = straight(&pm, 100, 2);
        assert!(mid.r.abs_diff(127) <= 1 && mid.b.abs_diff(128) <= 1);
    }

    #[test]
    fn later_fill_composites_over_earlier() {
        let mut pm = Pixmap::new(4, 4).unwrap();
        pm.clear(Color::WHITE);
        let half_red = PaintStyle::fill().with_color(Color::RED.with_alpha(128));
        pm.fill_rounded_rect(Rect::from_size(4.0, 4.0), 0.0, &half_red);

        let c = straight(&pm, 1, 1);
        assert_eq!(c.a, 255);
        assert_eq!(c.r, 255);
        assert!(c.g.abs_diff(127) <= 1);
    }

    // ── stroke ────────────────────────────────────────────────────────────

    #[test]
    fn stroke_paints_a_centered_band() {
        let mut pm = Pixmap::new(30, 30).unwrap();
        let paint = PaintStyle::stroke(4.0).with_color(Color::GREEN);
        pm.stroke_rounded_rect(Rect::new(5.0, 5.0, 20.0, 20.0), 0.0, &paint);

        // Band spans x in [3, 7] along the left edge.
        assert_eq!(straight(&pm, 3, 15), Color::GREEN);
        assert_eq!(straight(&pm, 6, 15), Color::GREEN);
        assert_eq!(straight(&pm, 1, 15).a, 0);
        assert_eq!(straight(&pm, 15, 15).a, 0);
    }

    #[test]
    fn zero_width_stroke_draws_nothing() {
        let mut pm = Pixmap::new(10, 10).unwrap();
        pm.stroke_rounded_rect(Rect::from_size(10.0, 10.0), 2.0, &PaintStyle::stroke(0.0));
        assert!(pm.data().iter().all(|&b| b == 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "fill drawn with a stroke paint")]
    fn fill_with_stroke_paint_is_rejected() {
        let mut pm = Pixmap::new(4, 4).unwrap();
        pm.fill_rounded_rect(Rect::from_size(4.0, 4.0), 0.0, &PaintStyle::stroke(1.0));
    }

    // ── degenerate geometry ───────────────────────────────────────────────

    #[test]
    fn non_finite_geometry_is_skipped() {
        let mut pm = Pixmap::new(16, 16).unwrap();
        let fill = PaintStyle::fill().with_color(Color::RED);
        let stroke = PaintStyle::stroke(2.0).with_color(Color::RED);
        let full = Rect::from_size(16.0, 16.0);

        pm.stroke_rounded_rect(full, 2.0, &PaintStyle::stroke(f32::NAN).with_color(Color::RED));
        pm.stroke_rounded_rect(full, f32::NAN, &stroke);
        pm.fill_rounded_rect(full, f32::NAN, &fill);
        pm.fill_rounded_rect(Rect::new(f32::NAN, 0.0, 8.0, 8.0), 0.0, &fill);
        pm.stroke_rounded_rect(Rect::new(0.0, 0.0, f32::NAN, 8.0), 0.0, &stroke);
        pm.fill_rounded_rect(Rect::new(f32::INFINITY, 0.0, 8.0, 8.0), 0.0, &fill);
        assert!(pm.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn off_canvas_shapes_leave_pixels_untouched() {
        let mut pm = Pixmap::new(16, 16).unwrap();
        let fill = PaintStyle::fill().with_color(Color::RED);
        pm.fill_rounded_rect(Rect::new(1e30, 1e30, 10.0, 10.0), 0.0, &fill);
        pm.fill_rounded_rect(Rect::new(-50.0, -50.0, 10.0, 10.0), 2.0, &fill);
        pm.stroke_rounded_rect(
            Rect::new(-50.0, -50.0, 10.0, 10.0),
            2.0,
            &PaintStyle::stroke(4.0).with_color(Color::RED),
        );
        assert!(pm.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn straight_export_demultiplies() {
        let mut pm = Pixmap::new(1, 1).unwrap();
        pm.clear(Color::from_rgba(200, 100, 50, 128));
        let bytes = pm.to_straight_rgba8();
        assert_eq!(bytes[3], 128);
        assert!(bytes[0].abs_diff(200) <= 1);
        assert!(bytes[1].abs_diff(100) <= 1);
        assert!(bytes[2].abs_diff(50) <= 1);
    }
}
