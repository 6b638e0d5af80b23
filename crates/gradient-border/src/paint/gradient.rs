use crate::coords::{Rect, Vec2};

use super::Color;

/// Gradient spread behavior outside the [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to the edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Maps an arbitrary axis parameter into [0, 1].
    #[inline]
    fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t - t.floor(),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

/// Axis a gradient ramp runs along, relative to the bounds it is built for.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    /// Left edge to right edge.
    #[default]
    LeftRight,
    /// Top edge to bottom edge.
    TopBottom,
    /// Top-left corner to bottom-right corner.
    LeftTopBottomRight,
    /// Bottom-left corner to top-right corner.
    LeftBottomRightTop,
}

impl GradientDirection {
    /// Start and end points of the ramp over `bounds`.
    pub fn endpoints(self, bounds: Rect) -> (Vec2, Vec2) {
        let Vec2 { x: x0, y: y0 } = bounds.origin;
        let (w, h) = (bounds.width(), bounds.height());
        match self {
            GradientDirection::LeftRight => (Vec2::new(x0, y0), Vec2::new(x0 + w, y0)),
            GradientDirection::TopBottom => (Vec2::new(x0, y0), Vec2::new(x0, y0 + h)),
            GradientDirection::LeftTopBottomRight => {
                (Vec2::new(x0, y0), Vec2::new(x0 + w, y0 + h))
            }
            GradientDirection::LeftBottomRightTop => {
                (Vec2::new(x0, y0 + h), Vec2::new(x0 + w, y0))
            }
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected sorted by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient brush.
///
/// Semantics:
/// - `start` and `end` are in the same coordinate space as the geometry it paints.
/// - colors between stops are interpolated in straight alpha.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Distributes `colors` evenly along the axis: stop `i` sits at `i / (n - 1)`.
    ///
    /// A single color yields one stop at `t = 0`.
    pub fn evenly_spaced(start: Vec2, end: Vec2, colors: &[Color], spread: SpreadMode) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorStop::new(i as f32 / last, c))
            .collect();
        Self::new(start, end, stops, spread)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Colors of the stops, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(|s| s.color)
    }

    /// Evaluates the brush at `p`.
    ///
    /// Invalid gradients paint their first stop (transparent if there is none).
    pub fn sample(&self, p: Vec2) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if !self.is_valid() || !p.is_finite() {
            return first.color;
        }

        let axis = self.end - self.start;
        let t = self.spread.apply((p - self.start).dot(axis) / axis.length_squared());

        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        // Past the last stop.
        self.stops[self.stops.len() - 1].color
    }
}
