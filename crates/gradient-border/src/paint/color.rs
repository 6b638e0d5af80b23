/// Straight-alpha 8-bit sRGB color.
///
/// Hosts typically hand colors over as packed `0xAARRGGBB` integers; use
/// [`Color::from_argb`] / [`Color::to_argb`] at that boundary.
///
/// Premultiplication happens only inside surfaces (see `raster::Pixmap`),
/// so gradient ramps interpolate straight channels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Same color with a replaced alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation of each straight channel, `t` clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Scales alpha by `alpha / 255`, leaving the hue untouched.
    #[inline]
    pub fn modulate_alpha(self, alpha: u8) -> Color {
        let a = (self.a as u32 * alpha as u32 + 127) / 255;
        self.with_alpha(a as u8)
    }

    /// Premultiplied `f32` components in [0, 1].
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trips_through_packed_form() {
        let c = Color::from_argb(0x80FF4020);
        assert_eq!(c, Color::from_rgba(0xFF, 0x40, 0x20, 0x80));
        assert_eq!(c.to_argb(), 0x80FF4020);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.5), Color::from_rgb(128, 0, 128));
    }

    #[test]
    fn lerp_clamps_out_of_range_t() {
        assert_eq!(Color::RED.lerp(Color::BLUE, -3.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 7.0), Color::BLUE);
    }

    #[test]
    fn modulate_alpha_keeps_hue() {
        let c = Color::from_rgb(10, 20, 30).modulate_alpha(128);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 128));
        assert_eq!(Color::WHITE.modulate_alpha(255), Color::WHITE);
        assert_eq!(Color::WHITE.modulate_alpha(0).a, 0);
    }

    #[test]
    fn premul_scales_rgb_by_alpha() {
        let [r, g, b, a] = Color::from_rgba(255, 0, 0, 51).to_premul_f32();
        assert!((r - 0.2).abs() < 1e-6);
        assert_eq!((g, b), (0.0, 0.0));
        assert!((a - 0.2).abs() < 1e-6);
    }
}
