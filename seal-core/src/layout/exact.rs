use super::{check_font, ArcLayout, ArcTextLayout, ArcTextRequest, GlyphPlacement, Overflow};
use crate::core::SealResult;
use crate::rendering::font::FontMetricsProvider;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Spaces glyphs by their measured advances, centered on the requested angle.
///
/// The sweep is `sum(advance) / radius`. Nothing is clamped: a caption wider
/// than the circumference is laid out as-is and flagged with an [`Overflow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactLayout;

impl ArcTextLayout for ExactLayout {
    fn layout(&self, req: &ArcTextRequest, metrics: &dyn FontMetricsProvider) -> SealResult<ArcLayout> {
        check_font(&req.font)?;
        let radius = req.circle.radius();

        // Measure everything first so an unknown glyph fails before any placement
        let glyphs = req
            .text
            .chars()
            .map(|ch| metrics.measure(ch, &req.font).map(|m| (ch, m)))
            .collect::<SealResult<SmallVec<[_; 32]>>>()?;

        let total_width: f64 = glyphs.iter().map(|(_, m)| m.advance).sum();
        let sweep = total_width / radius;
        let sign = req.direction.angular_sign();

        let mut angle = req.center_angle_deg.to_radians() - sign * sweep / 2.0;
        let mut placements = Vec::with_capacity(glyphs.len());
        for (ch, m) in &glyphs {
            let half_step = sign * m.advance / radius / 2.0;
            angle += half_step;
            placements.push(GlyphPlacement::on_circle(
                *ch,
                &req.circle,
                angle,
                req.orientation,
                (-m.width / 2.0, 0.0),
            ));
            angle += half_step;
        }

        let overflow = (sweep > TAU).then_some(Overflow { sweep, limit: TAU });

        Ok(ArcLayout {
            placements,
            sweep,
            overflow,
        })
    }
}
