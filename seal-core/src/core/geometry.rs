//! Geometric value types shared by layout and rendering.
//!
//! Two angle conventions meet here. Layout requests speak the math frame
//! (0 = +x, counter-clockwise positive, y up). The canvas is a raster frame
//! (origin top-left, y down), where a positive rotation turns visually
//! clockwise. [`Circle::point_at`] and [`to_raster_rotation`] do the mapping.

use super::error::{SealError, SealResult};
use serde::{Deserialize, Serialize};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds { x, y, width, height }
    }

    /// Build bounds from two opposite corners.
    pub fn from_corners(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Bounds::new(left, top, right - left, bottom - top)
    }
}

/// A circle on the canvas. The radius is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle, rejecting non-positive or non-finite radii.
    pub fn new(center: Point, radius: f64) -> SealResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SealError::invalid(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Circle { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Canvas point at a math-frame angle (radians) on this circle.
    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y - self.radius * angle.sin(),
        )
    }
}

/// Map a math-frame rotation (counter-clockwise positive) onto the raster
/// canvas, where positive rotations turn clockwise.
pub fn to_raster_rotation(math_angle: f64) -> f64 {
    -math_angle
}

/// Sweep order of glyphs along an arc, as seen on the finished image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Sign of the math-frame angle change as the sweep advances.
    pub fn angular_sign(self) -> f64 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::CounterClockwise => 1.0,
        }
    }
}

/// Whether a glyph's top points away from or toward the circle center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Outward,
    Inward,
}

impl Orientation {
    /// Math-frame rotation of a glyph sitting at `arc_angle`.
    ///
    /// Outward glyphs are upright at the top of a circle, inward glyphs are
    /// upright at the bottom. The two always differ by exactly π.
    pub fn glyph_rotation(self, arc_angle: f64) -> f64 {
        match self {
            Orientation::Outward => arc_angle - std::f64::consts::FRAC_PI_2,
            Orientation::Inward => arc_angle + std::f64::consts::FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font family, point size and weight. Immutable per layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64, weight: FontWeight) -> Self {
        FontSpec {
            family: family.into(),
            size,
            weight,
        }
    }

    pub fn regular(family: impl Into<String>, size: f64) -> Self {
        FontSpec::new(family, size, FontWeight::Normal)
    }

    pub fn bold(family: impl Into<String>, size: f64) -> Self {
        FontSpec::new(family, size, FontWeight::Bold)
    }

    /// Same family and weight at another size.
    pub fn sized(&self, size: f64) -> Self {
        FontSpec {
            size,
            ..self.clone()
        }
    }

    /// Same family and size with the weight forced by a bold flag.
    pub fn with_bold(&self, bold: bool) -> Self {
        FontSpec {
            weight: if bold { FontWeight::Bold } else { FontWeight::Normal },
            ..self.clone()
        }
    }
}
