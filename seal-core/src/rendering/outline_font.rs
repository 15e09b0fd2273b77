//! TrueType/OpenType faces via ttf-parser, with rustybuzz shaping for
//! horizontal runs.

use super::font::{FontMetricsProvider, GlyphMetrics, LineMetrics, OutlineMode, Typeface};
use super::path::Path;
use crate::core::{FontSpec, SealError, SealResult};
use rustybuzz::UnicodeBuffer;
use std::path::Path as FsPath;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// An outline font loaded from font-file bytes.
///
/// The bytes are owned; faces are re-parsed per call, which for ttf-parser is
/// only table-directory bookkeeping.
pub struct OutlineFont {
    data: Vec<u8>,
    index: u32,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Converts ttf-parser outlines into a [`Path`] in raster space, scaled and
/// shifted to a pen position.
struct PathConverter<'p> {
    path: &'p mut Path,
    scale: f64,
    dx: f64,
    dy: f64,
}

impl PathConverter<'_> {
    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        (self.dx + x as f64 * self.scale, self.dy - y as f64 * self.scale)
    }
}

impl OutlineBuilder for PathConverter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        // Degree-elevate the quadratic into a cubic
        let (qx, qy) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        let (x0, y0) = self.path.current_point().unwrap_or((qx, qy));
        self.path.curve_to(
            x0 + 2.0 / 3.0 * (qx - x0),
            y0 + 2.0 / 3.0 * (qy - y0),
            x + 2.0 / 3.0 * (qx - x),
            y + 2.0 / 3.0 * (qy - y),
            x,
            y,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.path.curve_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// One shaped glyph of a horizontal run.
struct PlacedGlyph {
    id: GlyphId,
    x: f64,
    y: f64,
}

impl OutlineFont {
    /// Load the first face in a font file's bytes.
    pub fn from_bytes(data: Vec<u8>) -> SealResult<Self> {
        Face::parse(&data, 0).map_err(|e| SealError::FontLoad(e.to_string()))?;
        if rustybuzz::Face::from_slice(&data, 0).is_none() {
            return Err(SealError::FontLoad("face cannot be shaped".into()));
        }
        Ok(OutlineFont { data, index: 0 })
    }

    /// Read and load a font file.
    pub fn from_file(path: impl AsRef<FsPath>) -> SealResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    fn face(&self) -> SealResult<Face<'_>> {
        Face::parse(&self.data, self.index).map_err(|e| SealError::FontLoad(e.to_string()))
    }

    fn scale(face: &Face<'_>, font: &FontSpec) -> f64 {
        font.size / f64::from(face.units_per_em())
    }

    fn glyph_id(face: &Face<'_>, ch: char, font: &FontSpec) -> SealResult<GlyphId> {
        face.glyph_index(ch)
            .filter(|id| id.0 != 0)
            .ok_or_else(|| SealError::missing_glyph(ch, &font.family))
    }

    /// Shape a run and return glyph ids with pen positions in pixels, plus the
    /// total advance.
    fn shape(&self, text: &str, font: &FontSpec) -> SealResult<(Vec<PlacedGlyph>, f64)> {
        let face = rustybuzz::Face::from_slice(&self.data, self.index)
            .ok_or_else(|| SealError::FontLoad("face cannot be shaped".into()))?;
        let scale = font.size / f64::from(face.units_per_em());

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let shaped = rustybuzz::shape(&face, &[], buffer);

        let mut glyphs = Vec::with_capacity(shaped.len());
        let mut pen_x = 0.0;
        for (info, pos) in shaped.glyph_infos().iter().zip(shaped.glyph_positions()) {
            if info.glyph_id == 0 {
                let ch = text[info.cluster as usize..].chars().next().unwrap_or('\u{FFFD}');
                return Err(SealError::missing_glyph(ch, &font.family));
            }
            let id = u16::try_from(info.glyph_id)
                .map_err(|_| SealError::FontLoad(format!("glyph id {} out of range", info.glyph_id)))?;
            glyphs.push(PlacedGlyph {
                id: GlyphId(id),
                x: pen_x + f64::from(pos.x_offset) * scale,
                y: -f64::from(pos.y_offset) * scale,
            });
            pen_x += f64::from(pos.x_advance) * scale;
        }
        Ok((glyphs, pen_x))
    }
}

impl FontMetricsProvider for OutlineFont {
    fn measure(&self, ch: char, font: &FontSpec) -> SealResult<GlyphMetrics> {
        let face = self.face()?;
        let id = Self::glyph_id(&face, ch, font)?;
        let scale = Self::scale(&face, font);

        let advance = face
            .glyph_hor_advance(id)
            .ok_or_else(|| SealError::missing_glyph(ch, &font.family))?;
        let (width, height) = face
            .glyph_bounding_box(id)
            .map(|bbox| (f64::from(bbox.width()) * scale, f64::from(bbox.height()) * scale))
            .unwrap_or((0.0, 0.0));

        Ok(GlyphMetrics {
            advance: f64::from(advance) * scale,
            width,
            height,
        })
    }
}

impl Typeface for OutlineFont {
    fn glyph_outline(&self, ch: char, font: &FontSpec) -> SealResult<Path> {
        let face = self.face()?;
        let id = Self::glyph_id(&face, ch, font)?;

        let mut path = Path::new();
        let mut converter = PathConverter {
            path: &mut path,
            scale: Self::scale(&face, font),
            dx: 0.0,
            dy: 0.0,
        };
        // Whitespace glyphs have no outline
        let _ = face.outline_glyph(id, &mut converter);
        Ok(path)
    }

    fn outline_mode(&self, _font: &FontSpec) -> OutlineMode {
        OutlineMode::Fill
    }

    fn line_metrics(&self, text: &str, font: &FontSpec) -> SealResult<LineMetrics> {
        let (glyphs, advance) = self.shape(text, font)?;
        let face = self.face()?;
        let scale = Self::scale(&face, font);

        let mut line = LineMetrics {
            advance,
            ..LineMetrics::default()
        };
        for glyph in &glyphs {
            if let Some(bbox) = face.glyph_bounding_box(glyph.id) {
                line.width = line.width.max(glyph.x + f64::from(bbox.x_max) * scale);
                line.height = line.height.max(f64::from(bbox.height()) * scale);
            }
        }
        Ok(line)
    }

    fn line_outline(&self, text: &str, font: &FontSpec) -> SealResult<Path> {
        let (glyphs, _) = self.shape(text, font)?;
        let face = self.face()?;
        let scale = Self::scale(&face, font);

        let mut path = Path::new();
        for glyph in &glyphs {
            let mut converter = PathConverter {
                path: &mut path,
                scale,
                dx: glyph.x,
                dy: glyph.y,
            };
            let _ = face.outline_glyph(glyph.id, &mut converter);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage_bytes() {
        let err = OutlineFont::from_bytes(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, SealError::FontLoad(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = OutlineFont::from_file("/nonexistent/seal-font.ttf").unwrap_err();
        assert!(matches!(err, SealError::Io(_)));
    }
}
