use crate::coords::Rect;
use crate::paint::{Color, GradientDirection, LinearGradient, SpreadMode};

pub const DEFAULT_COLOR: Color = Color::TRANSPARENT;
pub const DEFAULT_COLORS: [Color; 2] = [DEFAULT_COLOR, DEFAULT_COLOR];
/// Border thickness in device-independent units.
pub const DEFAULT_BORDER_WIDTH: f32 = 5.0;
/// Corner radius in device-independent units.
pub const DEFAULT_CORNER: f32 = 10.0;

/// A color ramp plus the direction it runs in.
///
/// Always holds at least two colors: a single color is doubled and an empty
/// list becomes [`DEFAULT_COLORS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSpec {
    colors: Vec<Color>,
    direction: GradientDirection,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS, GradientDirection::default())
    }
}

impl GradientSpec {
    pub fn new(colors: impl Into<Vec<Color>>, direction: GradientDirection) -> Self {
        let mut colors = colors.into();
        match colors.len() {
            0 => colors.extend_from_slice(&DEFAULT_COLORS),
            1 => colors.push(colors[0]),
            _ => {}
        }
        Self { colors, direction }
    }

    /// Two-stop ramp of the same color.
    #[inline]
    pub fn solid(color: Color, direction: GradientDirection) -> Self {
        Self::new([color, color], direction)
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// Builds the brush for `bounds`: evenly spaced stops, clamped at both ends.
    pub fn brush(&self, bounds: Rect) -> LinearGradient {
        let (start, end) = self.direction.endpoints(bounds);
        LinearGradient::evenly_spaced(start, end, &self.colors, SpreadMode::Pad)
    }
}

/// Appearance of a [`GradientBorderDrawable`](super::GradientBorderDrawable).
///
/// ```ignore
/// let config = RenderConfig::new()
///     .border_colors([Color::RED, Color::BLUE])
///     .background_colors([Color::WHITE])
///     .border_width(3.0)
///     .corner_radius(12.0)
///     .border_direction(GradientDirection::TopBottom);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub border: GradientSpec,
    pub background: GradientSpec,
    pub border_width: f32,
    pub corner_radius: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border: GradientSpec::default(),
            background: GradientSpec::default(),
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER,
        }
    }
}

impl RenderConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.border = GradientSpec::new(colors, self.border.direction);
        self
    }

    pub fn background_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.background = GradientSpec::new(colors, self.background.direction);
        self
    }

    pub fn border_direction(mut self, direction: GradientDirection) -> Self {
        self.border.direction = direction;
        self
    }

    pub fn background_direction(mut self, direction: GradientDirection) -> Self {
        self.background.direction = direction;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn defaults() {
        let c = RenderConfig::default();
        assert_eq!(c.border_width, 5.0);
        assert_eq!(c.corner_radius, 10.0);
        assert_eq!(c.border.colors(), &DEFAULT_COLORS);
        assert_eq!(c.background.direction(), GradientDirection::LeftRight);
    }

    #[test]
    fn short_color_lists_are_promoted() {
        assert_eq!(
            GradientSpec::new([Color::RED], GradientDirection::TopBottom).colors(),
            &[Color::RED, Color::RED]
        );
        assert_eq!(
            GradientSpec::new(Vec::<Color>::new(), GradientDirection::TopBottom).colors(),
            &DEFAULT_COLORS
        );
    }

    #[test]
    fn chained_setters_keep_direction() {
        let c = RenderConfig::new()
            .border_direction(GradientDirection::LeftTopBottomRight)
            .border_colors([Color::RED, Color::GREEN, Color::BLUE])
            .border_width(2.5)
            .corner_radius(0.0);
        assert_eq!(c.border.direction(), GradientDirection::LeftTopBottomRight);
        assert_eq!(c.border.colors().len(), 3);
        assert_eq!(c.border_width, 2.5);
        assert_eq!(c.corner_radius, 0.0);
    }

    #[test]
    fn brush_uses_direction_endpoints() {
        let spec = GradientSpec::new([Color::RED, Color::BLUE], GradientDirection::TopBottom);
        let brush = spec.brush(Rect::from_size(100.0, 50.0));
        assert_eq!(brush.start, Vec2::new(0.0, 0.0));
        assert_eq!(brush.end, Vec2::new(0.0, 50.0));
        assert_eq!(brush.spread, SpreadMode::Pad);
        assert_eq!(brush.colors().collect::<Vec<_>>(), vec![Color::RED, Color::BLUE]);
    }
}
