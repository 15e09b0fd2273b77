use super::{check_font, ArcLayout, ArcTextLayout, ArcTextRequest, GlyphPlacement};
use crate::core::{BudgetBands, Direction, Orientation, SealError, SealResult};
use crate::rendering::font::FontMetricsProvider;
use std::f64::consts::{FRAC_PI_2, PI};

/// Spreads an uppercased caption over an angular budget picked by its length.
///
/// A clockwise caption runs along the top of the circle (centered at π/2), a
/// counter-clockwise one along the bottom (centered at 3π/2); both read left
/// to right. Glyphs at the top face outward and glyphs at the bottom face
/// inward, whatever the request's orientation says. The per-glyph step never
/// lets the sweep exceed the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetedLayout {
    pub bands: BudgetBands,
}

impl BudgetedLayout {
    pub fn new(bands: BudgetBands) -> Self {
        BudgetedLayout { bands }
    }

    /// Angle between consecutive glyphs for a caption of `len` characters.
    pub fn angle_step(&self, len: usize, spacing: f64) -> f64 {
        if len < 2 {
            return 0.0;
        }
        let available = self.bands.available_angle(len);
        let max_step = available / (len - 1) as f64;
        let step = max_step * spacing * self.bands.shrink_factor(len);
        if step * (len - 1) as f64 > available {
            max_step
        } else {
            step
        }
    }
}

impl ArcTextLayout for BudgetedLayout {
    fn layout(&self, req: &ArcTextRequest, metrics: &dyn FontMetricsProvider) -> SealResult<ArcLayout> {
        check_font(&req.font)?;
        if !req.spacing.is_finite() || req.spacing <= 0.0 {
            return Err(SealError::InvalidRequest(format!(
                "spacing multiplier must be positive, got {}",
                req.spacing
            )));
        }

        let text: Vec<char> = req.text.to_uppercase().chars().collect();
        let n = text.len();
        if n == 0 {
            return Ok(ArcLayout::default());
        }

        let sign = req.direction.angular_sign();
        let center = match req.direction {
            Direction::Clockwise => FRAC_PI_2,
            Direction::CounterClockwise => 1.5 * PI,
        };
        // A lone glyph has no step, so it sits at the band edge
        let start = center - sign * self.bands.available_angle(n) / 2.0;
        let orientation = match req.direction {
            Direction::Clockwise => Orientation::Outward,
            Direction::CounterClockwise => Orientation::Inward,
        };
        let step = self.angle_step(n, req.spacing);

        let mut placements = Vec::with_capacity(n);
        for (i, &ch) in text.iter().enumerate() {
            let m = metrics.measure(ch, &req.font)?;
            let angle = start + sign * step * i as f64;
            placements.push(GlyphPlacement::on_circle(
                ch,
                &req.circle,
                angle,
                orientation,
                (-m.width / 2.0, m.height / 2.0),
            ));
        }

        Ok(ArcLayout {
            placements,
            sweep: step * (n - 1) as f64,
            overflow: None,
        })
    }
}
