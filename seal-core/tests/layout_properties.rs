//! Property-based tests for arc text layout.
//!
//! These tests use proptest to generate captions and circles and check the
//! layout invariants both strategies promise.

use proptest::prelude::*;
use seal_core::core::{BudgetBands, Circle, Direction, FontSpec, Orientation, Point};
use seal_core::layout::{ArcTextLayout, ArcTextRequest, BudgetedLayout, ExactLayout};
use seal_core::rendering::{FontMetricsProvider, StrokeFont};

const EPS: f64 = 1e-9;

fn caption() -> impl Strategy<Value = String> {
    "[A-Z0-9 .,/#&-]{0,40}"
}

fn circle() -> impl Strategy<Value = Circle> {
    (20.0f64..200.0).prop_map(|r| Circle::new(Point::new(250.0, 250.0), r).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Clockwise), Just(Direction::CounterClockwise)]
}

fn font() -> FontSpec {
    FontSpec::regular("Times New Roman", 22.0)
}

// ============================================================================
// Exact layout
// ============================================================================

/// Property: angles advance monotonically in the requested direction
proptest! {
    #[test]
    fn prop_exact_angles_monotonic(text in caption(), circle in circle(), dir in direction()) {
        let req = ArcTextRequest::new(text, circle, font()).direction(dir);
        let layout = ExactLayout.layout(&req, &StrokeFont::new()).unwrap();
        let sign = dir.angular_sign();

        let angles: Vec<f64> = layout.angles().collect();
        for pair in angles.windows(2) {
            prop_assert!(sign * (pair[1] - pair[0]) > 0.0);
        }
    }
}

/// Property: the sweep is the summed advance over the radius
proptest! {
    #[test]
    fn prop_exact_sweep_is_width_over_radius(text in caption(), circle in circle()) {
        let stroke = StrokeFont::new();
        let req = ArcTextRequest::new(text.clone(), circle, font());
        let layout = ExactLayout.layout(&req, &stroke).unwrap();

        let width: f64 = text.chars().map(|ch| stroke.measure(ch, &font()).unwrap().advance).sum();
        prop_assert!((layout.sweep - width / circle.radius()).abs() < EPS);
        prop_assert_eq!(layout.overflow.is_some(), layout.sweep > std::f64::consts::TAU);
    }
}

/// Property: the caption is centered on the requested angle
proptest! {
    #[test]
    fn prop_exact_centered(text in "[A-Z]{1,20}", center in 0.0f64..360.0, dir in direction()) {
        let circle = Circle::new(Point::new(0.0, 0.0), 100.0).unwrap();
        let req = ArcTextRequest::new(text, circle, font()).centered_at(center).direction(dir);
        let layout = ExactLayout.layout(&req, &StrokeFont::new()).unwrap();

        let angles: Vec<f64> = layout.angles().collect();
        let first = angles[0];
        let last = angles[angles.len() - 1];
        let stroke = StrokeFont::new();
        let first_half = stroke.measure(layout.placements[0].ch, &font()).unwrap().advance / 200.0;
        let last_half = stroke.measure(layout.placements[angles.len() - 1].ch, &font()).unwrap().advance / 200.0;
        let sign = dir.angular_sign();
        let start = first - sign * first_half;
        let end = last + sign * last_half;
        prop_assert!(((start + end) / 2.0 - center.to_radians()).abs() < 1e-6);
    }
}

/// Property: layout is a pure function of its inputs
proptest! {
    #[test]
    fn prop_exact_idempotent(text in caption(), circle in circle(), dir in direction()) {
        let req = ArcTextRequest::new(text, circle, font()).direction(dir);
        let a = ExactLayout.layout(&req, &StrokeFont::new()).unwrap();
        let b = ExactLayout.layout(&req, &StrokeFont::new()).unwrap();
        prop_assert_eq!(a, b);
    }
}

/// Property: every glyph position lies on the circle
proptest! {
    #[test]
    fn prop_positions_on_circle(text in caption(), circle in circle(), budgeted in any::<bool>()) {
        let mut req = ArcTextRequest::new(text, circle, font());
        if budgeted {
            req = req.budgeted(1.0);
        }
        let layout = seal_core::layout::layout_arc(&req, &StrokeFont::new()).unwrap();
        for p in &layout.placements {
            prop_assert!((p.position.distance(circle.center()) - circle.radius()).abs() < 1e-6);
        }
    }
}

/// Property: inward and outward placements differ by exactly half a turn
proptest! {
    #[test]
    fn prop_orientation_flips_by_pi(text in caption(), circle in circle()) {
        let req = ArcTextRequest::new(text, circle, font());
        let inward_req = req.clone().orientation(Orientation::Inward);

        let outward = ExactLayout.layout(&req, &StrokeFont::new()).unwrap();
        let inward = ExactLayout.layout(&inward_req, &StrokeFont::new()).unwrap();
        for (o, i) in outward.placements.iter().zip(&inward.placements) {
            prop_assert!(((o.rotation - i.rotation).abs() - std::f64::consts::PI).abs() < EPS);
            prop_assert_eq!(o.position, i.position);
        }
    }
}

// ============================================================================
// Budgeted layout
// ============================================================================

/// Property: the sweep never exceeds the band's available angle
proptest! {
    #[test]
    fn prop_budgeted_within_band(text in caption(), circle in circle(), spacing in 0.1f64..5.0, dir in direction()) {
        let bands = BudgetBands::default();
        let req = ArcTextRequest::new(text, circle, font()).direction(dir).budgeted(spacing);
        let layout = BudgetedLayout::new(bands).layout(&req, &StrokeFont::new()).unwrap();

        let n = layout.len();
        prop_assert!(layout.sweep <= bands.available_angle(n) + EPS);
        prop_assert!(layout.overflow.is_none());
    }
}

/// Property: consecutive glyphs are separated by one constant step
proptest! {
    #[test]
    fn prop_budgeted_constant_step(text in "[A-Z ]{3,30}", spacing in 0.1f64..5.0, dir in direction()) {
        let circle = Circle::new(Point::new(120.0, 125.0), 68.0).unwrap();
        let req = ArcTextRequest::new(text, circle, font()).direction(dir).budgeted(spacing);
        let layout = BudgetedLayout::default().layout(&req, &StrokeFont::new()).unwrap();

        let angles: Vec<f64> = layout.angles().collect();
        let step = angles[1] - angles[0];
        prop_assert!(dir.angular_sign() * step > 0.0);
        for pair in angles.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() < EPS);
        }
        prop_assert!((layout.sweep - step.abs() * (angles.len() - 1) as f64).abs() < 1e-6);
    }
}

/// Property: budgeted captions are drawn uppercased
proptest! {
    #[test]
    fn prop_budgeted_uppercases(text in "[a-z]{1,20}") {
        let circle = Circle::new(Point::new(120.0, 125.0), 68.0).unwrap();
        let req = ArcTextRequest::new(text.clone(), circle, font()).budgeted(2.5);
        let layout = BudgetedLayout::default().layout(&req, &StrokeFont::new()).unwrap();

        let drawn: String = layout.placements.iter().map(|p| p.ch).collect();
        prop_assert_eq!(drawn, text.to_uppercase());
    }
}

/// Property: budgeted glyph facing comes from the direction alone
proptest! {
    #[test]
    fn prop_budgeted_ignores_orientation(text in caption(), dir in direction()) {
        let circle = Circle::new(Point::new(120.0, 125.0), 68.0).unwrap();
        let req = ArcTextRequest::new(text, circle, font()).direction(dir).budgeted(2.5);
        let outward = BudgetedLayout::default().layout(&req, &StrokeFont::new()).unwrap();
        let inward = BudgetedLayout::default()
            .layout(&req.clone().orientation(Orientation::Inward), &StrokeFont::new())
            .unwrap();
        prop_assert_eq!(outward, inward);
    }
}
