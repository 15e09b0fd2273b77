//! Seal composition.
//!
//! [`SealComposer`] turns a validated [`SealRequest`] into a PNG on disk:
//! allocate a canvas, draw shapes and captions, encode, write. Every failure
//! is folded into the returned [`SealStatus`].

mod circle;
mod rectangle;

use crate::core::{
    BudgetBands, CircleSealLayout, FontSpec, RectangleSealLayout, SealError, SealRequest, SealResult,
    SealStatus,
};
use crate::layout::{ArcTextLayout, ArcTextRequest};
use crate::rendering::font::{FontMetricsProvider, GlyphMetrics, Typeface};
use crate::rendering::primitives::draw_glyph;
use crate::rendering::{Device, SkiaDevice};
use std::path::Path;

/// Renders seal requests with a shared, read-only set of fonts.
///
/// The composer holds no per-request state, so one instance can serve
/// concurrent renders.
pub struct SealComposer<'f> {
    typeface: &'f (dyn Typeface + Sync),
    circle: CircleSealLayout,
    rectangle: RectangleSealLayout,
    bands: BudgetBands,
}

impl<'f> SealComposer<'f> {
    pub fn new(typeface: &'f (dyn Typeface + Sync)) -> Self {
        SealComposer {
            typeface,
            circle: CircleSealLayout::default(),
            rectangle: RectangleSealLayout::default(),
            bands: BudgetBands::default(),
        }
    }

    pub fn with_circle_layout(mut self, layout: CircleSealLayout) -> Self {
        self.circle = layout;
        self
    }

    pub fn with_rectangle_layout(mut self, layout: RectangleSealLayout) -> Self {
        self.rectangle = layout;
        self
    }

    pub fn with_budget_bands(mut self, bands: BudgetBands) -> Self {
        self.bands = bands;
        self
    }

    /// Canvas size in pixels for a request.
    pub fn canvas_size(&self, request: &SealRequest) -> (u32, u32) {
        match request {
            SealRequest::Circle(_) => (self.circle.width, self.circle.height),
            SealRequest::Rectangle(seal) => (seal.canvas_width, seal.canvas_height),
        }
    }

    /// Parse, validate and render a JSON request.
    pub fn render_json(&self, json: &str) -> SealStatus {
        match SealRequest::from_json(json) {
            Ok(request) => self.render(&request),
            Err(e) => {
                tracing::error!(error = %e, "rejected seal request");
                SealStatus::failure(None, &e)
            }
        }
    }

    /// Render a request to its output file.
    pub fn render(&self, request: &SealRequest) -> SealStatus {
        let out = request.output_path();
        tracing::info!(style = request.style(), out = %out.display(), "rendering seal");

        match self.render_to_file(request, out) {
            Ok(bytes) => {
                tracing::info!(out = %out.display(), bytes, "seal written");
                SealStatus::success(out)
            }
            Err(e) => {
                tracing::error!(out = %out.display(), error = %e, "seal rendering failed");
                SealStatus::failure(Some(out.to_path_buf()), &e)
            }
        }
    }

    /// Render a request into PNG bytes without touching the filesystem.
    pub fn render_png(&self, request: &SealRequest) -> SealResult<Vec<u8>> {
        self.rasterize(request)?.encode_png()
    }

    /// Draw a request onto any device.
    pub fn draw(&self, request: &SealRequest, device: &mut dyn Device) -> SealResult<()> {
        let typeface: &dyn Typeface = self.typeface;
        match request {
            SealRequest::Circle(seal) => circle::draw_circle_seal(device, typeface, &self.circle, seal),
            SealRequest::Rectangle(seal) => {
                rectangle::draw_rectangle_seal(device, typeface, &self.rectangle, self.bands, seal)
            }
        }
    }

    fn rasterize(&self, request: &SealRequest) -> SealResult<SkiaDevice> {
        let (width, height) = self.canvas_size(request);
        let mut device = SkiaDevice::new(width, height)?;
        self.draw(request, &mut device)?;
        Ok(device)
    }

    fn render_to_file(&self, request: &SealRequest, out: &Path) -> SealResult<u64> {
        self.rasterize(request)?.save_png(out)?;
        let written = std::fs::metadata(out)?.len();
        if written == 0 {
            return Err(SealError::Rendering(format!("{} is empty after writing", out.display())));
        }
        Ok(written)
    }
}

/// Metrics view of a typeface, for the layout strategies.
struct TypefaceMetrics<'a>(&'a dyn Typeface);

impl FontMetricsProvider for TypefaceMetrics<'_> {
    fn measure(&self, ch: char, font: &FontSpec) -> SealResult<GlyphMetrics> {
        self.0.measure(ch, font)
    }
}

/// Lay out one caption and draw its glyphs.
fn draw_arc(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    strategy: &dyn ArcTextLayout,
    req: &ArcTextRequest,
) -> SealResult<()> {
    let layout = strategy.layout(req, &TypefaceMetrics(typeface))?;
    tracing::debug!(
        text = %req.text,
        glyphs = layout.len(),
        sweep = layout.sweep,
        "laid out caption"
    );
    if let Some(overflow) = layout.overflow {
        tracing::warn!(
            text = %req.text,
            sweep = overflow.sweep,
            limit = overflow.limit,
            "caption is wider than its circle"
        );
    }
    for placement in &layout.placements {
        draw_glyph(device, typeface, placement, &req.font)?;
    }
    Ok(())
}
