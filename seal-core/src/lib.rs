//! # seal-core: curved-text layout and notary seal composition
//!
//! Lays captions out along circular arcs and composes them, with a few
//! vector primitives, into round notary seals and rectangular notary stamps
//! rendered as PNG files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use seal_core::{FontBook, SealComposer};
//!
//! let fonts = FontBook::new();
//! let composer = SealComposer::new(&fonts);
//! let status = composer.render_json(r#"{
//!     "sealStyle": "circle",
//!     "upperCircleText": "STATE OF NEW YORK",
//!     "lowerCircleText": "COUNTY OF KINGS",
//!     "notaryId": "1234567",
//!     "expireOn": "05/01/2030",
//!     "outFile": "seal.png"
//! }"#);
//! println!("{}", status.to_json());
//! ```
//!
//! ## Layout only
//!
//! Arc layout needs nothing but glyph metrics, so it is available without
//! the `rendering` feature:
//!
//! ```
//! use seal_core::layout::{layout_arc, ArcTextRequest};
//! use seal_core::rendering::StrokeFont;
//! use seal_core::{Circle, FontSpec, Point};
//!
//! let circle = Circle::new(Point::new(250.0, 250.0), 95.0)?;
//! let req = ArcTextRequest::new("STATE OF NEW YORK", circle, FontSpec::regular("Times New Roman", 22.0));
//! let layout = layout_arc(&req, &StrokeFont::new())?;
//! assert_eq!(layout.len(), 17);
//! # Ok::<(), seal_core::SealError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **core**: geometry, configuration, requests and errors
//! 2. **layout**: exact and budgeted arc text strategies
//! 3. **rendering**: the [`Device`] abstraction, paths, fonts and primitives
//! 4. **composer**: the two seal styles drawn onto a device and written out

pub mod core;
pub mod layout;
pub mod rendering;

#[cfg(feature = "rendering")]
pub mod composer;

// Re-export main types for convenience
pub use core::{
    BudgetBands, Circle, CircleSeal, CircleSealLayout, Direction, FontConfig, FontSpec, FontWeight, Orientation,
    Point, RectangleSeal, RectangleSealLayout, SealError, SealRequest, SealResult, SealStatus,
};

pub use layout::{ArcLayout, ArcTextLayout, ArcTextRequest, BudgetedLayout, ExactLayout, GlyphPlacement, LayoutMode};

pub use rendering::{Device, FontMetricsProvider, Path, RecordingDevice, StrokeFont, Typeface};

#[cfg(feature = "rendering")]
pub use composer::SealComposer;

#[cfg(feature = "rendering")]
pub use rendering::{FontBook, OutlineFont, SkiaDevice};
