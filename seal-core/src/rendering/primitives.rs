//! Shape and text drawing helpers used by the seal composers.
//!
//! Coordinates are canvas pixels, origin top-left, y down. Shapes are stroked
//! in black with the stroke centered on the geometry.

use super::device::{Device, Paint, PathDrawMode};
use super::font::{OutlineMode, Typeface};
use super::graphics_state::{multiply, rotation, translation, Color, FillRule, StrokeProps};
use super::path::{Path, PathBuilder};
use crate::core::{Bounds, FontSpec, Point, SealResult};
use crate::layout::GlyphPlacement;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, PI};

const INK: Color = Color::black();

fn stroke(device: &mut dyn Device, path: &Path, stroke_width: f64) -> SealResult<()> {
    device.draw_path(
        path,
        PathDrawMode::Stroke,
        &Paint::from_color(INK),
        &StrokeProps::with_width(stroke_width),
    )
}

/// Paint a text outline the way its typeface expects.
fn paint_outline(device: &mut dyn Device, outline: &Path, mode: OutlineMode) -> SealResult<()> {
    match mode {
        OutlineMode::Fill => device.draw_path(
            outline,
            PathDrawMode::Fill(FillRule::NonZero),
            &Paint::from_color(INK),
            &StrokeProps::default(),
        ),
        OutlineMode::Stroke { width } => device.draw_path(
            outline,
            PathDrawMode::Stroke,
            &Paint::from_color(INK),
            &StrokeProps::rounded(width),
        ),
    }
}

pub fn draw_circle(device: &mut dyn Device, center: Point, radius: f64, stroke_width: f64) -> SealResult<()> {
    let mut path = Path::new();
    path.circle(center.x, center.y, radius);
    stroke(device, &path, stroke_width)
}

pub fn draw_rounded_rectangle(
    device: &mut dyn Device,
    bounds: Bounds,
    corner_radius: f64,
    stroke_width: f64,
) -> SealResult<()> {
    let mut path = Path::new();
    path.rounded_rect(bounds.x, bounds.y, bounds.width, bounds.height, corner_radius);
    stroke(device, &path, stroke_width)
}

pub fn draw_rectangle(device: &mut dyn Device, bounds: Bounds, stroke_width: f64) -> SealResult<()> {
    let mut path = Path::new();
    path.rect(bounds.x, bounds.y, bounds.width, bounds.height);
    stroke(device, &path, stroke_width)
}

/// Vertices of a five-pointed star, alternating outer and inner, starting
/// with the outer point straight up.
pub fn star_points(center: Point, outer_radius: f64, inner_radius: f64) -> SmallVec<[(f64, f64); 10]> {
    (0..10)
        .map(|i| {
            let angle = PI * i as f64 / 5.0 - FRAC_PI_2;
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            (center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

pub fn draw_five_point_star(
    device: &mut dyn Device,
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    stroke_width: f64,
) -> SealResult<()> {
    let mut path = Path::new();
    path.polyline(&star_points(center, outer_radius, inner_radius), true);
    stroke(device, &path, stroke_width)
}

pub fn draw_line(device: &mut dyn Device, from: Point, to: Point, stroke_width: f64) -> SealResult<()> {
    let mut builder = PathBuilder::new();
    builder.move_to(from.x, from.y).line_to(to.x, to.y);
    stroke(device, &builder.build(), stroke_width)
}

/// Draw a run of text with its left baseline point at `position`.
pub fn draw_horizontal_text(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    position: Point,
    text: &str,
    font: &FontSpec,
    bold: bool,
) -> SealResult<()> {
    let font = font.with_bold(bold);
    let outline = typeface.line_outline(text, &font)?;
    device.save_state();
    device.concat_matrix(&translation(position.x, position.y));
    let result = paint_outline(device, &outline, typeface.outline_mode(&font));
    device.restore_state();
    result
}

/// Draw one arc-laid glyph: move to its position on the circle, rotate, then
/// shift by its anchor offset in the rotated frame.
pub fn draw_glyph(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    placement: &GlyphPlacement,
    font: &FontSpec,
) -> SealResult<()> {
    let outline = typeface.glyph_outline(placement.ch, font)?;
    if outline.is_empty() {
        return Ok(());
    }
    let (dx, dy) = placement.offset;
    let transform = multiply(
        &multiply(
            &translation(placement.position.x, placement.position.y),
            &rotation(placement.rotation),
        ),
        &translation(dx, dy),
    );

    device.save_state();
    device.concat_matrix(&transform);
    let result = paint_outline(device, &outline, typeface.outline_mode(font));
    device.restore_state();
    result
}
