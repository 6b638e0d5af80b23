use crate::coords::Rect;
use crate::paint::PaintStyle;

/// Rounded rectangle payload shared by stroke and fill commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub paint: PaintStyle,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, paint: PaintStyle) -> Self {
        Self { rect, radius, paint }
    }
}

/// Surface-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    StrokeRoundedRect(RoundedRectCmd),
    FillRoundedRect(RoundedRectCmd),
}

impl DrawCmd {
    /// Payload regardless of the command kind.
    #[inline]
    pub fn rounded_rect(&self) -> &RoundedRectCmd {
        match self {
            DrawCmd::StrokeRoundedRect(c) | DrawCmd::FillRoundedRect(c) => c,
        }
    }
}
