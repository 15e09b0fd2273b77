//! Family/weight lookup over loaded outline fonts, with the stroke font as the
//! last resort.

use super::font::{FontMetricsProvider, GlyphMetrics, LineMetrics, OutlineMode, Typeface};
use super::outline_font::OutlineFont;
use super::path::Path;
use super::stroke_font::StrokeFont;
use crate::core::config::{SANS_FAMILY, SERIF_FAMILY};
use crate::core::{FontConfig, FontSpec, FontWeight, SealError, SealResult};
use rustc_hash::FxHashMap;

/// Resolves a [`FontSpec`] to a concrete typeface.
///
/// Families are matched case-insensitively. A bold request falls back to the
/// regular face of the same family (and vice versa) before falling back to
/// the built-in stroke font.
#[derive(Debug)]
pub struct FontBook {
    faces: FxHashMap<(String, FontWeight), OutlineFont>,
    stroke: StrokeFont,
    stroke_fallback: bool,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontBook {
    /// An empty book that draws everything with the stroke font.
    pub fn new() -> Self {
        FontBook {
            faces: FxHashMap::default(),
            stroke: StrokeFont::new(),
            stroke_fallback: true,
        }
    }

    /// Load the font files named by `config`.
    pub fn from_config(config: &FontConfig) -> SealResult<Self> {
        let mut book = Self::new();
        book.stroke_fallback = config.stroke_fallback;

        let entries = [
            (SERIF_FAMILY, FontWeight::Normal, &config.serif),
            (SERIF_FAMILY, FontWeight::Bold, &config.serif_bold),
            (SANS_FAMILY, FontWeight::Normal, &config.sans),
            (SANS_FAMILY, FontWeight::Bold, &config.sans_bold),
        ];
        for (family, weight, path) in entries {
            let Some(path) = path else { continue };
            let font = OutlineFont::from_file(path).map_err(|e| {
                SealError::FontLoad(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!(family, ?weight, path = %path.display(), "loaded font");
            book.register(family, weight, font);
        }
        Ok(book)
    }

    /// Add or replace the face for a family and weight.
    pub fn register(&mut self, family: &str, weight: FontWeight, font: OutlineFont) {
        self.faces.insert((family.to_lowercase(), weight), font);
    }

    /// Enable or disable the stroke-font fallback.
    pub fn set_stroke_fallback(&mut self, enabled: bool) {
        self.stroke_fallback = enabled;
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn resolve(&self, font: &FontSpec) -> Option<&dyn Typeface> {
        let family = font.family.to_lowercase();
        let other = match font.weight {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        };
        if let Some(face) = self
            .faces
            .get(&(family.clone(), font.weight))
            .or_else(|| self.faces.get(&(family, other)))
        {
            return Some(face);
        }
        if self.stroke_fallback {
            Some(&self.stroke)
        } else {
            None
        }
    }

    fn require(&self, ch: char, font: &FontSpec) -> SealResult<&dyn Typeface> {
        self.resolve(font)
            .ok_or_else(|| SealError::missing_glyph(ch, &font.family))
    }

    fn require_line(&self, text: &str, font: &FontSpec) -> SealResult<Option<&dyn Typeface>> {
        match text.chars().next() {
            Some(first) => self.require(first, font).map(Some),
            None => Ok(None),
        }
    }
}

impl FontMetricsProvider for FontBook {
    fn measure(&self, ch: char, font: &FontSpec) -> SealResult<GlyphMetrics> {
        self.require(ch, font)?.measure(ch, font)
    }
}

impl Typeface for FontBook {
    fn glyph_outline(&self, ch: char, font: &FontSpec) -> SealResult<Path> {
        self.require(ch, font)?.glyph_outline(ch, font)
    }

    fn outline_mode(&self, font: &FontSpec) -> OutlineMode {
        self.resolve(font)
            .map(|face| face.outline_mode(font))
            .unwrap_or(OutlineMode::Fill)
    }

    fn line_metrics(&self, text: &str, font: &FontSpec) -> SealResult<LineMetrics> {
        match self.require_line(text, font)? {
            Some(face) => face.line_metrics(text, font),
            None => Ok(LineMetrics::default()),
        }
    }

    fn line_outline(&self, text: &str, font: &FontSpec) -> SealResult<Path> {
        match self.require_line(text, font)? {
            Some(face) => face.line_outline(text, font),
            None => Ok(Path::new()),
        }
    }
}
