//! A tiny-skia based rendering device.

use crate::core::{SealError, SealResult};
use crate::rendering::device::{Device, Paint, PathDrawMode};
use crate::rendering::graphics_state::{Color, FillRule, LineCap, LineJoin, StrokeProps};
use crate::rendering::path::{Path, PathElement};
use std::path::Path as FsPath;
use tiny_skia::{
    FillRule as SkiaFillRule, LineCap as SkiaLineCap, LineJoin as SkiaLineJoin, Paint as SkiaPaint,
    PathBuilder, Pixmap, Stroke, Transform,
};

// --- Conversion helpers ---

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn to_skia_paint(paint: &Paint) -> SkiaPaint<'static> {
    let mut sk_paint = SkiaPaint::default();
    match paint {
        Paint::Solid(color) => {
            sk_paint.set_color(to_skia_color(*color));
        }
    }
    sk_paint.anti_alias = true;
    sk_paint
}

fn to_skia_line_cap(line_cap: LineCap) -> SkiaLineCap {
    match line_cap {
        LineCap::Butt => SkiaLineCap::Butt,
        LineCap::Round => SkiaLineCap::Round,
        LineCap::Square => SkiaLineCap::Square,
    }
}

fn to_skia_line_join(line_join: LineJoin) -> SkiaLineJoin {
    match line_join {
        LineJoin::Miter => SkiaLineJoin::Miter,
        LineJoin::Round => SkiaLineJoin::Round,
        LineJoin::Bevel => SkiaLineJoin::Bevel,
    }
}

fn to_skia_fill_rule(fill_rule: FillRule) -> SkiaFillRule {
    match fill_rule {
        FillRule::NonZero => SkiaFillRule::Winding,
        FillRule::EvenOdd => SkiaFillRule::EvenOdd,
    }
}

fn to_skia_stroke(stroke_props: &StrokeProps) -> Stroke {
    Stroke {
        width: stroke_props.line_width as f32,
        miter_limit: stroke_props.miter_limit as f32,
        line_cap: to_skia_line_cap(stroke_props.line_cap),
        line_join: to_skia_line_join(stroke_props.line_join),
        dash: None,
    }
}

fn to_skia_transform(matrix: &[f64; 6]) -> Transform {
    Transform::from_row(
        matrix[0] as f32,
        matrix[1] as f32,
        matrix[2] as f32,
        matrix[3] as f32,
        matrix[4] as f32,
        matrix[5] as f32,
    )
}

/// Returns `None` for paths with no drawable segments.
fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathElement::MoveTo(x, y) => builder.move_to(x as f32, y as f32),
            PathElement::LineTo(x, y) => builder.line_to(x as f32, y as f32),
            PathElement::CurveTo(cp1x, cp1y, cp2x, cp2y, x, y) => builder.cubic_to(
                cp1x as f32,
                cp1y as f32,
                cp2x as f32,
                cp2y as f32,
                x as f32,
                y as f32,
            ),
            PathElement::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Rasterizes onto a canvas it owns. One device per seal image.
pub struct SkiaDevice {
    pixmap: Pixmap,
    state_stack: Vec<Transform>,
}

impl SkiaDevice {
    /// Allocate a transparent canvas.
    pub fn new(width: u32, height: u32) -> SealResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            SealError::Rendering(format!("cannot allocate a {}x{} canvas", width, height))
        })?;
        Ok(SkiaDevice {
            pixmap,
            state_stack: vec![Transform::identity()],
        })
    }

    fn current_transform(&self) -> Transform {
        self.state_stack
            .last()
            .copied()
            .unwrap_or_else(Transform::identity)
    }

    fn set_current_transform(&mut self, transform: Transform) {
        match self.state_stack.last_mut() {
            Some(current) => *current = transform,
            None => self.state_stack.push(transform),
        }
    }

    /// Unpremultiplied color of one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // Pixmap::pixel indexes the flat buffer, so an x past the edge would
        // land on the next row
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> SealResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| SealError::Rendering(format!("PNG encoding failed: {}", e)))
    }

    /// Encode the canvas and write it to `path`.
    pub fn save_png(&self, path: impl AsRef<FsPath>) -> SealResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

impl Device for SkiaDevice {
    fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    fn draw_path(
        &mut self,
        path: &Path,
        mode: PathDrawMode,
        paint: &Paint,
        stroke_props: &StrokeProps,
    ) -> SealResult<()> {
        let Some(path) = to_skia_path(path) else {
            return Ok(());
        };

        let sk_paint = to_skia_paint(paint);
        let transform = self.current_transform();

        match mode {
            PathDrawMode::Fill(fill_rule) => {
                self.pixmap
                    .fill_path(&path, &sk_paint, to_skia_fill_rule(fill_rule), transform, None);
            }
            PathDrawMode::Stroke => {
                let sk_stroke = to_skia_stroke(stroke_props);
                self.pixmap
                    .stroke_path(&path, &sk_paint, &sk_stroke, transform, None);
            }
        }

        Ok(())
    }

    fn save_state(&mut self) {
        let current = self.current_transform();
        self.state_stack.push(current);
    }

    fn restore_state(&mut self) {
        if self.state_stack.len() > 1 {
            self.state_stack.pop();
        }
    }

    fn concat_matrix(&mut self, matrix: &[f64; 6]) {
        let transform = self.current_transform().pre_concat(to_skia_transform(matrix));
        self.set_current_transform(transform);
    }

    fn page_bounds(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::graphics_state::translation;

    #[test]
    fn test_zero_size_canvas_is_error() {
        assert!(matches!(SkiaDevice::new(0, 10), Err(SealError::Rendering(_))));
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let device = SkiaDevice::new(4, 4).unwrap();
        assert_eq!(device.pixel(1, 1), Some(Color::transparent()));
        assert_eq!(device.pixel(4, 0), None);
        assert_eq!(device.pixel(0, 4), None);
        assert_eq!(device.page_bounds(), (4.0, 4.0));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut device = SkiaDevice::new(20, 20).unwrap();
        device.clear(Color::white());
        assert_eq!(device.pixel(0, 0), Some(Color::white()));

        let mut square = Path::new();
        square.rect(0.0, 0.0, 10.0, 10.0);
        device.save_state();
        device.concat_matrix(&translation(10.0, 10.0));
        device
            .draw_path(
                &square,
                PathDrawMode::Fill(FillRule::NonZero),
                &Paint::black(),
                &StrokeProps::default(),
            )
            .unwrap();
        device.restore_state();

        assert_eq!(device.pixel(15, 15), Some(Color::black()));
        assert_eq!(device.pixel(5, 5), Some(Color::white()));
    }

    #[test]
    fn test_pixel_past_right_edge_does_not_wrap() {
        let mut device = SkiaDevice::new(4, 2).unwrap();
        let mut second_row = Path::new();
        second_row.rect(0.0, 1.0, 4.0, 1.0);
        device
            .draw_path(
                &second_row,
                PathDrawMode::Fill(FillRule::NonZero),
                &Paint::black(),
                &StrokeProps::default(),
            )
            .unwrap();

        assert_eq!(device.pixel(0, 1), Some(Color::black()));
        assert_eq!(device.pixel(3, 0), Some(Color::transparent()));
        assert_eq!(device.pixel(4, 0), None);
        assert_eq!(device.pixel(5, 0), None);
    }

    #[test]
    fn test_empty_path_is_noop() {
        let mut device = SkiaDevice::new(4, 4).unwrap();
        device
            .draw_path(&Path::new(), PathDrawMode::Stroke, &Paint::black(), &StrokeProps::default())
            .unwrap();
        assert_eq!(device.pixel(0, 0), Some(Color::transparent()));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("canvas.png");
        let device = SkiaDevice::new(8, 8).unwrap();
        device.save_png(&out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
