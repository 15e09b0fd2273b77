//! Font metrics and glyph outlines.
//!
//! Layout only needs [`FontMetricsProvider`]. Drawing additionally needs glyph
//! outlines, which is what [`Typeface`] adds. Outlines are produced in the
//! glyph's local raster frame: origin on the baseline at the pen position,
//! x to the right, y down, already scaled to the requested point size.

use super::path::Path;
use crate::core::{FontSpec, SealResult};

/// Measurements of a single character at a given point size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    /// Horizontal pen advance
    pub advance: f64,
    /// Width of the inked area
    pub width: f64,
    /// Height of the inked area
    pub height: f64,
}

/// Measurements of a horizontal run of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    /// Sum of advances
    pub advance: f64,
    /// Inked width (pen start to the right edge of the last glyph)
    pub width: f64,
    /// Tallest inked glyph
    pub height: f64,
}

/// Source of per-character measurements.
///
/// Implementations must fail with `MetricsUnavailable` rather than return a
/// zero width for characters they cannot measure: arc layout depends on every
/// advance being real.
pub trait FontMetricsProvider {
    fn measure(&self, ch: char, font: &FontSpec) -> SealResult<GlyphMetrics>;
}

/// How a typeface's outlines are painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineMode {
    /// Closed contours, filled with the nonzero rule
    Fill,
    /// Open polylines stroked with the given pen width
    Stroke { width: f64 },
}

/// A font that can be drawn.
pub trait Typeface: FontMetricsProvider {
    /// Outline of one character with its pen origin at (0, 0).
    fn glyph_outline(&self, ch: char, font: &FontSpec) -> SealResult<Path>;

    /// How outlines from this typeface are painted at `font`.
    fn outline_mode(&self, font: &FontSpec) -> OutlineMode;

    /// Measure a horizontal run.
    fn line_metrics(&self, text: &str, font: &FontSpec) -> SealResult<LineMetrics> {
        let mut line = LineMetrics::default();
        for ch in text.chars() {
            let m = self.measure(ch, font)?;
            line.width = line.advance + m.width;
            line.advance += m.advance;
            line.height = line.height.max(m.height);
        }
        Ok(line)
    }

    /// Outline of a horizontal run with its pen origin at (0, 0).
    fn line_outline(&self, text: &str, font: &FontSpec) -> SealResult<Path> {
        let mut path = Path::new();
        let mut pen_x = 0.0;
        for ch in text.chars() {
            let glyph = self.glyph_outline(ch, font)?;
            path.extend_translated(&glyph, pen_x, 0.0);
            pen_x += self.measure(ch, font)?.advance;
        }
        Ok(path)
    }
}
