//! Built-in monoline stroke font.
//!
//! Used for families that have no outline font registered, so seals render
//! the same on every host without system fonts. Glyphs are polylines on a
//! grid 6 units tall (cap height), y up. Lowercase letters reuse the capital
//! shapes at small-cap scale.

use super::font::{FontMetricsProvider, GlyphMetrics, OutlineMode, Typeface};
use super::path::Path;
use crate::core::{FontSpec, FontWeight, SealError, SealResult};
use smallvec::SmallVec;

/// Cap height as a fraction of the point size.
const CAP_HEIGHT_RATIO: f64 = 0.7;
/// Grid units per cap height.
const GRID_HEIGHT: f64 = 6.0;
/// Empty space on each side of a glyph, in grid units.
const SIDE_BEARING: f64 = 0.75;
/// Scale applied to capital shapes when drawing lowercase.
const SMALL_CAP_SCALE: f64 = 0.8;
/// Pen width as a fraction of the point size.
const PEN_NORMAL: f64 = 0.07;
const PEN_BOLD: f64 = 0.11;

type Stroke = &'static [(f64, f64)];

struct StrokeGlyph {
    ch: char,
    width: f64,
    strokes: &'static [Stroke],
}

const fn glyph(ch: char, width: f64, strokes: &'static [Stroke]) -> StrokeGlyph {
    StrokeGlyph { ch, width, strokes }
}

const O_RING: Stroke = &[
    (1.0, 0.0),
    (0.0, 1.0),
    (0.0, 5.0),
    (1.0, 6.0),
    (3.0, 6.0),
    (4.0, 5.0),
    (4.0, 1.0),
    (3.0, 0.0),
    (1.0, 0.0),
];
const P_BOWL: Stroke = &[
    (0.0, 0.0),
    (0.0, 6.0),
    (3.0, 6.0),
    (4.0, 5.0),
    (4.0, 4.0),
    (3.0, 3.0),
    (0.0, 3.0),
];

static GLYPHS: &[StrokeGlyph] = &[
    glyph(' ', 3.0, &[]),
    glyph('A', 4.0, &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)], &[(0.67, 2.0), (3.33, 2.0)]]),
    glyph(
        'B',
        4.0,
        &[
            P_BOWL,
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)],
        ],
    ),
    glyph(
        'C',
        4.0,
        &[&[
            (4.0, 5.0),
            (3.0, 6.0),
            (1.0, 6.0),
            (0.0, 5.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 1.0),
        ]],
    ),
    glyph(
        'D',
        4.0,
        &[&[
            (0.0, 0.0),
            (0.0, 6.0),
            (2.0, 6.0),
            (4.0, 4.0),
            (4.0, 2.0),
            (2.0, 0.0),
            (0.0, 0.0),
        ]],
    ),
    glyph(
        'E',
        4.0,
        &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]],
    ),
    glyph('F', 4.0, &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]]),
    glyph(
        'G',
        4.0,
        &[&[
            (4.0, 5.0),
            (3.0, 6.0),
            (1.0, 6.0),
            (0.0, 5.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 1.0),
            (4.0, 3.0),
            (2.0, 3.0),
        ]],
    ),
    glyph(
        'H',
        4.0,
        &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
    ),
    glyph(
        'I',
        2.0,
        &[&[(0.0, 6.0), (2.0, 6.0)], &[(1.0, 6.0), (1.0, 0.0)], &[(0.0, 0.0), (2.0, 0.0)]],
    ),
    glyph('J', 4.0, &[&[(4.0, 6.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0)]]),
    glyph(
        'K',
        4.0,
        &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 6.0), (0.0, 2.0)], &[(1.0, 3.0), (4.0, 0.0)]],
    ),
    glyph('L', 4.0, &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]]),
    glyph('M', 4.0, &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 3.0), (4.0, 6.0), (4.0, 0.0)]]),
    glyph('N', 4.0, &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 0.0), (4.0, 6.0)]]),
    glyph('O', 4.0, &[O_RING]),
    glyph('P', 4.0, &[P_BOWL]),
    glyph('Q', 4.0, &[O_RING, &[(2.0, 2.0), (4.0, 0.0)]]),
    glyph('R', 4.0, &[P_BOWL, &[(2.0, 3.0), (4.0, 0.0)]]),
    glyph(
        'S',
        4.0,
        &[&[
            (4.0, 5.0),
            (3.0, 6.0),
            (1.0, 6.0),
            (0.0, 5.0),
            (0.0, 4.0),
            (1.0, 3.0),
            (3.0, 3.0),
            (4.0, 2.0),
            (4.0, 1.0),
            (3.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
        ]],
    ),
    glyph('T', 4.0, &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)]]),
    glyph(
        'U',
        4.0,
        &[&[(0.0, 6.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 6.0)]],
    ),
    glyph('V', 4.0, &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)]]),
    glyph('W', 4.0, &[&[(0.0, 6.0), (1.0, 0.0), (2.0, 4.0), (3.0, 0.0), (4.0, 6.0)]]),
    glyph('X', 4.0, &[&[(0.0, 0.0), (4.0, 6.0)], &[(0.0, 6.0), (4.0, 0.0)]]),
    glyph('Y', 4.0, &[&[(0.0, 6.0), (2.0, 3.0), (4.0, 6.0)], &[(2.0, 3.0), (2.0, 0.0)]]),
    glyph('Z', 4.0, &[&[(0.0, 6.0), (4.0, 6.0), (0.0, 0.0), (4.0, 0.0)]]),
    glyph('0', 4.0, &[O_RING, &[(0.0, 1.0), (4.0, 5.0)]]),
    glyph('1', 2.0, &[&[(0.0, 5.0), (1.0, 6.0), (1.0, 0.0)], &[(0.0, 0.0), (2.0, 0.0)]]),
    glyph(
        '2',
        4.0,
        &[&[
            (0.0, 5.0),
            (1.0, 6.0),
            (3.0, 6.0),
            (4.0, 5.0),
            (4.0, 4.0),
            (0.0, 0.0),
            (4.0, 0.0),
        ]],
    ),
    glyph(
        '3',
        4.0,
        &[
            &[(0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (1.0, 3.0)],
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        ],
    ),
    glyph('4', 4.0, &[&[(3.0, 0.0), (3.0, 6.0), (0.0, 2.0), (4.0, 2.0)]]),
    glyph(
        '5',
        4.0,
        &[&[
            (4.0, 6.0),
            (0.0, 6.0),
            (0.0, 3.0),
            (3.0, 3.0),
            (4.0, 2.0),
            (4.0, 1.0),
            (3.0, 0.0),
            (0.0, 0.0),
        ]],
    ),
    glyph(
        '6',
        4.0,
        &[&[
            (4.0, 5.0),
            (3.0, 6.0),
            (1.0, 6.0),
            (0.0, 5.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 1.0),
            (4.0, 2.0),
            (3.0, 3.0),
            (0.0, 3.0),
        ]],
    ),
    glyph('7', 4.0, &[&[(0.0, 6.0), (4.0, 6.0), (1.0, 0.0)]]),
    glyph(
        '8',
        4.0,
        &[
            &[(1.0, 3.0), (0.0, 4.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (1.0, 3.0)],
            &[(1.0, 3.0), (0.0, 2.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0)],
        ],
    ),
    glyph(
        '9',
        4.0,
        &[&[
            (0.0, 1.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 1.0),
            (4.0, 5.0),
            (3.0, 6.0),
            (1.0, 6.0),
            (0.0, 5.0),
            (0.0, 4.0),
            (1.0, 3.0),
            (4.0, 3.0),
        ]],
    ),
    glyph(':', 1.0, &[&[(0.5, 0.0), (0.5, 0.5)], &[(0.5, 3.5), (0.5, 4.0)]]),
    glyph('.', 1.0, &[&[(0.5, 0.0), (0.5, 0.5)]]),
    glyph(',', 1.0, &[&[(0.5, 0.5), (0.0, -1.0)]]),
    glyph('-', 3.0, &[&[(0.0, 3.0), (3.0, 3.0)]]),
    glyph('/', 3.0, &[&[(0.0, 0.0), (3.0, 6.0)]]),
    glyph('\'', 1.0, &[&[(0.5, 6.0), (0.5, 4.5)]]),
    glyph(
        '#',
        4.0,
        &[
            &[(1.0, 0.0), (2.0, 6.0)],
            &[(2.0, 0.0), (3.0, 6.0)],
            &[(0.0, 2.0), (4.0, 2.0)],
            &[(0.0, 4.0), (4.0, 4.0)],
        ],
    ),
    glyph(
        '&',
        4.0,
        &[&[
            (4.0, 0.0),
            (1.0, 4.0),
            (1.0, 5.0),
            (2.0, 6.0),
            (3.0, 5.0),
            (3.0, 4.0),
            (0.0, 2.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (4.0, 2.0),
        ]],
    ),
    glyph('(', 2.0, &[&[(2.0, 6.5), (0.5, 4.5), (0.5, 1.5), (2.0, -0.5)]]),
    glyph(')', 2.0, &[&[(0.0, 6.5), (1.5, 4.5), (1.5, 1.5), (0.0, -0.5)]]),
];

/// The built-in stroke font. Every family and weight maps onto the same
/// shapes; bold only widens the pen.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeFont;

impl StrokeFont {
    pub fn new() -> Self {
        StrokeFont
    }

    /// Whether a character has a glyph.
    pub fn covers(&self, ch: char) -> bool {
        lookup(ch).is_some()
    }

    fn resolve(&self, ch: char, font: &FontSpec) -> SealResult<(&'static StrokeGlyph, f64)> {
        let scale = if ch.is_lowercase() { SMALL_CAP_SCALE } else { 1.0 };
        lookup(ch)
            .map(|g| (g, scale))
            .ok_or_else(|| SealError::missing_glyph(ch, &font.family))
    }

    fn pen_width(font: &FontSpec) -> f64 {
        match font.weight {
            FontWeight::Normal => font.size * PEN_NORMAL,
            FontWeight::Bold => font.size * PEN_BOLD,
        }
    }
}

fn lookup(ch: char) -> Option<&'static StrokeGlyph> {
    let upper = if ch.is_lowercase() {
        let mut it = ch.to_uppercase();
        match (it.next(), it.next()) {
            (Some(c), None) => c,
            _ => return None,
        }
    } else {
        ch
    };
    GLYPHS.iter().find(|g| g.ch == upper)
}

/// Grid units to pixels.
fn unit(font: &FontSpec) -> f64 {
    font.size * CAP_HEIGHT_RATIO / GRID_HEIGHT
}

impl FontMetricsProvider for StrokeFont {
    fn measure(&self, ch: char, font: &FontSpec) -> SealResult<GlyphMetrics> {
        let (glyph, scale) = self.resolve(ch, font)?;
        let u = unit(font);
        let advance = (glyph.width * scale + 2.0 * SIDE_BEARING) * u;

        let ys = glyph.strokes.iter().flat_map(|s| s.iter().map(|&(_, y)| y));
        let (min_y, max_y) = ys.fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
        if min_y > max_y {
            // Blank glyph (space)
            return Ok(GlyphMetrics {
                advance,
                width: 0.0,
                height: 0.0,
            });
        }

        let pen = Self::pen_width(font);
        Ok(GlyphMetrics {
            advance,
            width: glyph.width * scale * u + pen,
            height: (max_y - min_y) * scale * u + pen,
        })
    }
}

impl Typeface for StrokeFont {
    fn glyph_outline(&self, ch: char, font: &FontSpec) -> SealResult<Path> {
        let (glyph, scale) = self.resolve(ch, font)?;
        let u = unit(font) * scale;
        let left = SIDE_BEARING * unit(font);

        let mut path = Path::new();
        for stroke in glyph.strokes {
            let points: SmallVec<[(f64, f64); 12]> = stroke
                .iter()
                .map(|&(x, y)| (left + x * u, -y * u))
                .collect();
            path.polyline(&points, false);
        }
        Ok(path)
    }

    fn outline_mode(&self, font: &FontSpec) -> OutlineMode {
        OutlineMode::Stroke {
            width: Self::pen_width(font),
        }
    }
}
