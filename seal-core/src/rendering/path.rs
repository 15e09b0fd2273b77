//! Path construction for seal drawing.
//!
//! Paths are built incrementally from move, line, curve and close operations,
//! plus shape helpers (rectangles, circles, rounded rectangles, polygons) used
//! by the seal primitives. Circular arcs are approximated with cubic Béziers.

use super::graphics_state::transform_point;

/// Control-point distance for a quarter-circle cubic Bézier, as a fraction of
/// the radius.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// A path element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Move to a new point (starts a new subpath)
    MoveTo(f64, f64),
    /// Line to a point
    LineTo(f64, f64),
    /// Cubic Bézier curve (cp1x, cp1y, cp2x, cp2y, x, y)
    CurveTo(f64, f64, f64, f64, f64, f64),
    /// Close the current subpath
    ClosePath,
}

impl PathElement {
    fn map_points(self, f: impl Fn(f64, f64) -> (f64, f64)) -> Self {
        match self {
            PathElement::MoveTo(x, y) => {
                let (x, y) = f(x, y);
                PathElement::MoveTo(x, y)
            }
            PathElement::LineTo(x, y) => {
                let (x, y) = f(x, y);
                PathElement::LineTo(x, y)
            }
            PathElement::CurveTo(cp1x, cp1y, cp2x, cp2y, x, y) => {
                let (cp1x, cp1y) = f(cp1x, cp1y);
                let (cp2x, cp2y) = f(cp2x, cp2y);
                let (x, y) = f(x, y);
                PathElement::CurveTo(cp1x, cp1y, cp2x, cp2y, x, y)
            }
            PathElement::ClosePath => PathElement::ClosePath,
        }
    }
}

/// A path for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathElement>,

    /// Current point (if any)
    current_point: Option<(f64, f64)>,

    /// Start of the current subpath (for close operations)
    subpath_start: Option<(f64, f64)>,

    /// Whether we have an open subpath
    has_open_subpath: bool,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new point, starting a new subpath.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.elements.push(PathElement::MoveTo(x, y));
        self.current_point = Some((x, y));
        self.subpath_start = Some((x, y));
        self.has_open_subpath = false;
    }

    /// Add a line segment from the current point to (x, y).
    pub fn line_to(&mut self, x: f64, y: f64) {
        // If we don't have a current point, implicit move
        if self.current_point.is_none() {
            self.move_to(x, y);
            return;
        }

        self.elements.push(PathElement::LineTo(x, y));
        self.current_point = Some((x, y));
        self.has_open_subpath = true;
    }

    /// Add a cubic Bézier curve.
    pub fn curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        if self.current_point.is_none() {
            self.move_to(cp1x, cp1y);
        }

        self.elements
            .push(PathElement::CurveTo(cp1x, cp1y, cp2x, cp2y, x, y));
        self.current_point = Some((x, y));
        self.has_open_subpath = true;
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        if self.has_open_subpath {
            self.elements.push(PathElement::ClosePath);
            if let Some(start) = self.subpath_start {
                self.current_point = Some(start);
            }
            self.has_open_subpath = false;
        }
    }

    /// Add a closed rectangle.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    /// Add a closed circle as four cubic quadrants, starting at the rightmost
    /// point.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = r * KAPPA;
        self.move_to(cx + r, cy);
        self.curve_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        self.curve_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
        self.curve_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
        self.curve_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        self.close_path();
    }

    /// Add a closed rectangle whose corners are quarter circles of `radius`.
    ///
    /// The radius is capped at half the shorter side.
    pub fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        let r = radius.max(0.0).min(width.min(height) / 2.0);
        if r == 0.0 {
            self.rect(x, y, width, height);
            return;
        }
        let k = r * KAPPA;
        let (right, bottom) = (x + width, y + height);

        self.move_to(x + r, y);
        self.line_to(right - r, y);
        self.curve_to(right - r + k, y, right, y + r - k, right, y + r);
        self.line_to(right, bottom - r);
        self.curve_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
        self.line_to(x + r, bottom);
        self.curve_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
        self.line_to(x, y + r);
        self.curve_to(x, y + r - k, x + r - k, y, x + r, y);
        self.close_path();
    }

    /// Add a polygon through `points`, optionally closed.
    pub fn polyline(&mut self, points: &[(f64, f64)], close: bool) {
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            self.move_to(x, y);
            for &(x, y) in iter {
                self.line_to(x, y);
            }
            if close {
                self.close_path();
            }
        }
    }

    /// Append every element of `other`, shifted by (dx, dy).
    pub fn extend_translated(&mut self, other: &Path, dx: f64, dy: f64) {
        for el in &other.elements {
            self.elements.push(el.map_points(|x, y| (x + dx, y + dy)));
        }
        self.current_point = other.current_point.map(|(x, y)| (x + dx, y + dy));
        self.subpath_start = other.subpath_start.map(|(x, y)| (x + dx, y + dy));
        self.has_open_subpath = other.has_open_subpath;
    }

    /// A copy of this path mapped through an affine transform.
    pub fn transformed(&self, matrix: &[f64; 6]) -> Path {
        let map = |x, y| transform_point(matrix, x, y);
        Path {
            elements: self.elements.iter().map(|el| el.map_points(map)).collect(),
            current_point: self.current_point.map(|(x, y)| map(x, y)),
            subpath_start: self.subpath_start.map(|(x, y)| map(x, y)),
            has_open_subpath: self.has_open_subpath,
        }
    }

    /// Get the current point.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.current_point
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Rough bounding box `(min_x, min_y, max_x, max_y)` over all points,
    /// including Bézier control points.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.elements.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for el in &self.elements {
            match el {
                PathElement::MoveTo(x, y) | PathElement::LineTo(x, y) => {
                    min_x = min_x.min(*x);
                    min_y = min_y.min(*y);
                    max_x = max_x.max(*x);
                    max_y = max_y.max(*y);
                }
                PathElement::CurveTo(cp1x, cp1y, cp2x, cp2y, x, y) => {
                    min_x = min_x.min(*cp1x).min(*cp2x).min(*x);
                    min_y = min_y.min(*cp1y).min(*cp2y).min(*y);
                    max_x = max_x.max(*cp1x).max(*cp2x).max(*x);
                    max_y = max_y.max(*cp1y).max(*cp2y).max(*y);
                }
                PathElement::ClosePath => {}
            }
        }

        Some((min_x, min_y, max_x, max_y))
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.path.move_to(x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.path.line_to(x, y);
        self
    }

    pub fn curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.path.curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.path.close_path();
        self
    }

    /// Finish building and take the path.
    pub fn build(self) -> Path {
        self.path
    }
}
