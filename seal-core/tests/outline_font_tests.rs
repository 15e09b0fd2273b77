//! Outline font metrics and outlines against a real TrueType face.
//!
//! The fixture is DejaVu Serif (Bitstream Vera license, see
//! `fixtures/DejaVuSerif-LICENSE.txt`).

use seal_core::core::config::SERIF_FAMILY;
use seal_core::core::{FontSpec, FontWeight, SealError};
use seal_core::rendering::{FontMetricsProvider, OutlineMode, Path, PathElement, Typeface};
use seal_core::{FontBook, OutlineFont};

const EPS: f64 = 1e-3;

fn fixture() -> OutlineFont {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSerif.ttf");
    OutlineFont::from_file(path).unwrap()
}

fn font() -> FontSpec {
    FontSpec::regular(SERIF_FAMILY, 20.0)
}

fn bbox(path: &Path) -> (f64, f64, f64, f64) {
    path.bounding_box().unwrap()
}

#[test]
fn test_measure_latin_glyph() {
    let metrics = fixture().measure('H', &font()).unwrap();

    assert!(metrics.advance > 10.0 && metrics.advance < 20.0);
    assert!(metrics.width > 0.0);
    // Cap height sits well inside the em
    assert!(metrics.height > 10.0 && metrics.height < 20.0);
}

#[test]
fn test_outline_is_flipped_into_raster_space() {
    let face = fixture();
    let outline = face.glyph_outline('H', &font()).unwrap();
    let (_, min_y, _, max_y) = bbox(&outline);

    // Baseline at y = 0, ink above it at negative y
    assert!(max_y.abs() < EPS, "max_y = {max_y}");
    assert!(min_y < -10.0);
    let height = face.measure('H', &font()).unwrap().height;
    assert!((-min_y - height).abs() < EPS);
}

#[test]
fn test_quadratic_contours_become_cubics() {
    let outline = fixture().glyph_outline('O', &font()).unwrap();

    let mut pen = (0.0, 0.0);
    let mut curves = 0;
    for element in outline.elements() {
        match *element {
            PathElement::MoveTo(x, y) | PathElement::LineTo(x, y) => pen = (x, y),
            PathElement::CurveTo(c1x, c1y, c2x, c2y, x, y) => {
                // Both control points lead back to the same quadratic control point
                let from_start = (pen.0 + 1.5 * (c1x - pen.0), pen.1 + 1.5 * (c1y - pen.1));
                let from_end = (x + 1.5 * (c2x - x), y + 1.5 * (c2y - y));
                assert!((from_start.0 - from_end.0).abs() < EPS);
                assert!((from_start.1 - from_end.1).abs() < EPS);
                pen = (x, y);
                curves += 1;
            }
            PathElement::ClosePath => {}
        }
    }
    assert!(curves >= 4);
}

#[test]
fn test_space_has_advance_but_no_outline() {
    let face = fixture();
    assert!(face.measure(' ', &font()).unwrap().advance > 0.0);
    assert!(face.glyph_outline(' ', &font()).unwrap().is_empty());
}

#[test]
fn test_shaped_line_metrics() {
    let face = fixture();
    let h = face.measure('H', &font()).unwrap();
    let line = face.line_metrics("HH", &font()).unwrap();

    assert!((line.advance - 2.0 * h.advance).abs() < EPS);
    assert!((line.height - h.height).abs() < EPS);
    assert!(line.width > h.advance);

    let outline = face.line_outline("HH", &font()).unwrap();
    let (min_x, _, max_x, max_y) = bbox(&outline);
    assert!(min_x > -EPS);
    assert!((max_x - line.width).abs() < EPS);
    assert!(max_y.abs() < EPS);
}

#[test]
fn test_line_metrics_scale_with_size() {
    let face = fixture();
    let small = face.line_metrics("SEAL", &font()).unwrap();
    let large = face.line_metrics("SEAL", &FontSpec::regular(SERIF_FAMILY, 40.0)).unwrap();
    assert!((large.advance - 2.0 * small.advance).abs() < EPS);
}

#[test]
fn test_uncovered_char_is_metrics_unavailable() {
    let face = fixture();

    let err = face.measure('漢', &font()).unwrap_err();
    assert!(matches!(err, SealError::MetricsUnavailable { ch: '漢', .. }));
    assert!(face.glyph_outline('漢', &font()).is_err());

    let err = face.line_metrics("NOTARY 漢", &font()).unwrap_err();
    assert!(matches!(err, SealError::MetricsUnavailable { ch: '漢', .. }));
}

#[test]
fn test_font_book_prefers_registered_face() {
    let mut book = FontBook::new();
    book.register(SERIF_FAMILY, FontWeight::Normal, fixture());

    let direct = fixture().measure('H', &font()).unwrap();
    assert_eq!(book.measure('H', &font()).unwrap(), direct);
    assert_eq!(book.outline_mode(&font()), OutlineMode::Fill);

    // Bold falls back to the regular face of the same family
    let bold = FontSpec::bold("times new roman", 20.0);
    assert_eq!(book.measure('H', &bold).unwrap(), direct);
}
