//! Signed distance helpers for rounded rectangles.
//!
//! Negative inside, positive outside, zero on the outline.

use crate::coords::{Rect, Vec2};

/// Signed distance from `p` to a rounded rectangle.
///
/// `radius` is clamped to [0, min(w, h) / 2].
pub(crate) fn rounded_rect(p: Vec2, rect: Rect, radius: f32) -> f32 {
    let half = rect.size * 0.5;
    let r = radius.max(0.0).min(half.x.min(half.y));
    let q = (p - rect.center()).abs() - half + Vec2::new(r, r);
    let outside = q.max(Vec2::zero()).length();
    let inside = q.x.max(q.y).min(0.0);
    outside + inside - r
}

/// Signed distance to the band `[-w/2, +w/2]` around a rounded rectangle's outline.
///
/// Matches a centered stroke: outer edge `rect` grown by `w/2` with radius
/// `r + w/2` (or square when `r <= 0`), inner edge `rect` shrunk by `w/2`
/// with radius `max(0, r - w/2)`.
pub(crate) fn rounded_rect_ring(p: Vec2, rect: Rect, radius: f32, width: f32) -> f32 {
    let half = width * 0.5;
    // Square paths keep square outer corners (miter join).
    let outer_radius = if radius > 0.0 { radius + half } else { 0.0 };
    let outer = rounded_rect(p, rect.inset(-half), outer_radius);

    let inner_rect = rect.inset(half);
    if inner_rect.is_empty() {
        // Stroke wider than the shape: the band covers the whole interior.
        return outer;
    }
    let inner = rounded_rect(p, inner_rect, (radius - half).max(0.0));
    outer.max(-inner)
}

/// Pixel coverage for a signed distance, 1px anti-aliasing ramp.
#[inline]
pub(crate) fn coverage(d: f32, anti_alias: bool) -> f32 {
    if anti_alias {
        (0.5 - d).clamp(0.0, 1.0)
    } else if d <= 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn square_corner_distances() {
        let r = Rect::from_size(10.0, 10.0);
        assert!(approx(rounded_rect(Vec2::new(5.0, 5.0), r, 0.0), -5.0));
        assert!(approx(rounded_rect(Vec2::new(12.0, 5.0), r, 0.0), 2.0));
        assert!(approx(rounded_rect(Vec2::new(10.0, 5.0), r, 0.0), 0.0));
    }

    #[test]
    fn rounded_corner_is_cut() {
        let r = Rect::from_size(20.0, 20.0);
        // The sharp corner point lies outside once rounded.
        let d = rounded_rect(Vec2::new(0.0, 0.0), r, 5.0);
        assert!(approx(d, 5.0 * 2f32.sqrt() - 5.0));
    }

    #[test]
    fn radius_clamps_to_half_extent() {
        let r = Rect::from_size(10.0, 10.0);
        assert!(approx(
            rounded_rect(Vec2::new(5.0, 0.0), r, 100.0),
            rounded_rect(Vec2::new(5.0, 0.0), r, 5.0),
        ));
    }

    #[test]
    fn ring_is_centered_on_outline() {
        let r = Rect::from_size(20.0, 20.0);
        // Outline at x = 0; band spans x in [-2, 2].
        assert!(approx(rounded_rect_ring(Vec2::new(0.0, 10.0), r, 0.0, 4.0), -2.0));
        assert!(approx(rounded_rect_ring(Vec2::new(5.0, 10.0), r, 0.0, 4.0), 3.0));
        assert!(approx(rounded_rect_ring(Vec2::new(-5.0, 10.0), r, 0.0, 4.0), 3.0));
    }

    #[test]
    fn coverage_ramp() {
        assert_eq!(coverage(-3.0, true), 1.0);
        assert_eq!(coverage(3.0, true), 0.0);
        assert_eq!(coverage(0.0, true), 0.5);
        assert_eq!(coverage(0.0, false), 1.0);
        assert_eq!(coverage(0.2, false), 0.0);
    }
}
