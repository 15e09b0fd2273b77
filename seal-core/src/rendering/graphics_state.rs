//! Drawing state: colors, stroke properties and the current transform.
//!
//! Transforms are 6-element affine matrices `[a b c d e f]`:
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! mapping (x, y) to (a*x + c*y + e, b*x + d*y + f) in raster space.

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Stroke is squared off at the endpoint
    #[default]
    Butt,
    /// Semicircular cap centered on the endpoint
    Round,
    /// Stroke continues half a line width beyond the endpoint
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Outer edges meet at a sharp point
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Fill rule for closed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Stroke properties for path rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeProps {
    /// Line width in pixels (default: 1.0)
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// Maximum ratio of miter length to line width before a bevel is used
    pub miter_limit: f64,
}

impl Default for StrokeProps {
    fn default() -> Self {
        StrokeProps {
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 10.0,
        }
    }
}

impl StrokeProps {
    /// Default stroke at the given width.
    pub fn with_width(line_width: f64) -> Self {
        StrokeProps {
            line_width,
            ..Self::default()
        }
    }

    /// Round caps and joins, used for stroke-font glyphs.
    pub fn rounded(line_width: f64) -> Self {
        StrokeProps {
            line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Self::default()
        }
    }
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque color from byte components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Color::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Color::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Color::rgba(0, 0, 0, 0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// The identity transform.
pub const IDENTITY: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Translation by (tx, ty).
pub fn translation(tx: f64, ty: f64) -> [f64; 6] {
    [1.0, 0.0, 0.0, 1.0, tx, ty]
}

/// Rotation by `angle` radians in the raster frame (positive turns clockwise
/// on screen, since y points down).
pub fn rotation(angle: f64) -> [f64; 6] {
    let (sin, cos) = angle.sin_cos();
    [cos, sin, -sin, cos, 0.0, 0.0]
}

/// `outer * inner`: apply `inner` first, then `outer`.
pub fn multiply(outer: &[f64; 6], inner: &[f64; 6]) -> [f64; 6] {
    let [a, b, c, d, e, f] = *inner;
    let [oa, ob, oc, od, oe, of] = *outer;
    [
        oa * a + oc * b,
        ob * a + od * b,
        oa * c + oc * d,
        ob * c + od * d,
        oa * e + oc * f + oe,
        ob * e + od * f + of,
    ]
}

/// Map a point through a transform.
pub fn transform_point(m: &[f64; 6], x: f64, y: f64) -> (f64, f64) {
    let [a, b, c, d, e, f] = *m;
    (a * x + c * y + e, b * x + d * y + f)
}

/// Per-device drawing state, saved and restored as a stack. Paint and
/// stroke settings travel with each draw call, so only the transform lives
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    /// Current transformation matrix
    pub ctm: [f64; 6],
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState { ctm: IDENTITY }
    }
}

impl GraphicsState {
    /// Concatenate a transform onto the CTM, so it applies before the
    /// existing transform.
    pub fn concat_matrix(&mut self, transform: &[f64; 6]) {
        self.ctm = multiply(&self.ctm, transform);
    }

    /// Transform a point by the CTM.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        transform_point(&self.ctm, x, y)
    }
}
