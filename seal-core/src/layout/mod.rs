//! Arc text layout.
//!
//! Places each character of a caption along a circle, rotated tangent to it.
//! Two strategies implement [`ArcTextLayout`]:
//! - [`ExactLayout`] spaces glyphs by their measured advances, so the sweep
//!   is exactly the text width divided by the radius.
//! - [`BudgetedLayout`] spreads glyphs over an angular budget chosen from the
//!   caption length; metrics are used only to center each glyph.
//!
//! Angles are in the math frame (y up, counter-clockwise positive). Positions
//! and rotations in [`GlyphPlacement`] are already mapped to the raster frame.

pub mod budgeted;
pub mod exact;

pub use budgeted::BudgetedLayout;
pub use exact::ExactLayout;

use crate::core::{Circle, Direction, FontSpec, Orientation, Point, SealError, SealResult};
use crate::rendering::font::FontMetricsProvider;
use serde::Serialize;

/// Which layout strategy a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Measured advances, centered on the requested angle
    #[default]
    Exact,
    /// Length-banded angular budget
    Budgeted,
}

/// A caption to lay out along a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcTextRequest {
    pub text: String,
    pub circle: Circle,
    /// Center of the caption in degrees, math frame. Budgeted layout derives
    /// the center from the direction instead.
    pub center_angle_deg: f64,
    pub direction: Direction,
    /// Glyph facing for exact layout. Budgeted layout faces clockwise
    /// captions outward and counter-clockwise captions inward.
    pub orientation: Orientation,
    pub font: FontSpec,
    pub mode: LayoutMode,
    /// Step multiplier for budgeted layout
    pub spacing: f64,
}

impl ArcTextRequest {
    /// An exact-mode, clockwise, outward caption centered at the top.
    pub fn new(text: impl Into<String>, circle: Circle, font: FontSpec) -> Self {
        ArcTextRequest {
            text: text.into(),
            circle,
            center_angle_deg: 90.0,
            direction: Direction::Clockwise,
            orientation: Orientation::Outward,
            font,
            mode: LayoutMode::Exact,
            spacing: 1.0,
        }
    }

    pub fn centered_at(mut self, degrees: f64) -> Self {
        self.center_angle_deg = degrees;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Switch to budgeted layout with the given step multiplier.
    pub fn budgeted(mut self, spacing: f64) -> Self {
        self.mode = LayoutMode::Budgeted;
        self.spacing = spacing;
        self
    }
}

/// Where and how one glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Angle on the circle in radians, math frame
    pub arc_angle: f64,
    /// Rotation in radians, raster frame (positive turns visually clockwise)
    pub rotation: f64,
    /// Point on the circle in canvas pixels
    pub position: Point,
    /// Pen origin relative to `position`, in the glyph's rotated frame
    pub offset: (f64, f64),
}

impl GlyphPlacement {
    fn on_circle(ch: char, circle: &Circle, arc_angle: f64, orientation: Orientation, offset: (f64, f64)) -> Self {
        GlyphPlacement {
            ch,
            arc_angle,
            rotation: crate::core::geometry::to_raster_rotation(orientation.glyph_rotation(arc_angle)),
            position: circle.point_at(arc_angle),
            offset,
        }
    }
}

/// A caption sweeping more than the limit around its circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overflow {
    pub sweep: f64,
    pub limit: f64,
}

/// Result of laying out one caption.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ArcLayout {
    pub placements: Vec<GlyphPlacement>,
    /// Angle between the sweep's start and end, in radians
    pub sweep: f64,
    pub overflow: Option<Overflow>,
}

impl ArcLayout {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.placements.iter().map(|p| p.arc_angle)
    }
}

/// A strategy for placing a caption along a circle.
pub trait ArcTextLayout {
    fn layout(&self, req: &ArcTextRequest, metrics: &dyn FontMetricsProvider) -> SealResult<ArcLayout>;
}

/// Lay out a caption with the strategy named by its mode and default
/// budget bands.
pub fn layout_arc(req: &ArcTextRequest, metrics: &dyn FontMetricsProvider) -> SealResult<ArcLayout> {
    match req.mode {
        LayoutMode::Exact => ExactLayout.layout(req, metrics),
        LayoutMode::Budgeted => BudgetedLayout::default().layout(req, metrics),
    }
}

fn check_font(font: &FontSpec) -> SealResult<()> {
    if !font.size.is_finite() || font.size <= 0.0 {
        return Err(SealError::InvalidRequest(format!(
            "font size must be positive, got {}",
            font.size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::stroke_font::StrokeFont;

    fn circle() -> Circle {
        Circle::new(Point::new(250.0, 250.0), 100.0).unwrap()
    }

    #[test]
    fn test_request_builder() {
        let req = ArcTextRequest::new("ABC", circle(), FontSpec::regular("Arial", 16.0))
            .centered_at(270.0)
            .direction(Direction::CounterClockwise)
            .orientation(Orientation::Inward)
            .budgeted(2.5);
        assert_eq!(req.center_angle_deg, 270.0);
        assert_eq!(req.mode, LayoutMode::Budgeted);
        assert_eq!(req.spacing, 2.5);
    }

    #[test]
    fn test_layout_arc_dispatches_on_mode() {
        let font = FontSpec::regular("Arial", 16.0);
        let exact = ArcTextRequest::new("AB", circle(), font.clone());
        let budgeted = exact.clone().budgeted(1.0);

        let a = layout_arc(&exact, &StrokeFont::new()).unwrap();
        let b = layout_arc(&budgeted, &StrokeFont::new()).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        // Two glyphs in the 1.5π band sweep the whole band
        assert!((b.sweep - 1.5 * std::f64::consts::PI).abs() < 1e-9);
        assert!(a.sweep < b.sweep);
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let req = ArcTextRequest::new("AB", circle(), FontSpec::regular("Arial", 0.0));
        let err = layout_arc(&req, &StrokeFont::new()).unwrap_err();
        assert!(matches!(err, SealError::InvalidRequest(_)));
    }
}
