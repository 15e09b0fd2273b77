//! Seal rendering layer.
//!
//! - A [`Device`] trait for backend abstraction, with a tiny-skia canvas and a
//!   recording device for tests
//! - Paths and drawing state
//! - Fonts: metrics, outlines, the built-in stroke font and (with the
//!   `rendering` feature) TrueType/OpenType faces
//! - Drawing primitives the seal composers are built from

pub mod device;
pub mod font;
pub mod graphics_state;
pub mod path;
pub mod primitives;
pub mod stroke_font;

pub use device::{Device, DrawOp, Paint, PathDrawMode, RecordingDevice};
pub use font::{FontMetricsProvider, GlyphMetrics, LineMetrics, OutlineMode, Typeface};
pub use graphics_state::{Color, FillRule, GraphicsState, LineCap, LineJoin, StrokeProps};
pub use path::{Path, PathBuilder, PathElement};
pub use stroke_font::StrokeFont;

#[cfg(feature = "rendering")]
pub mod font_book;

#[cfg(feature = "rendering")]
pub mod outline_font;

#[cfg(feature = "rendering")]
pub mod skia_device;

#[cfg(feature = "rendering")]
pub use font_book::FontBook;

#[cfg(feature = "rendering")]
pub use outline_font::OutlineFont;

#[cfg(feature = "rendering")]
pub use skia_device::SkiaDevice;
