use seal_core::core::{Bounds, Circle, FontSpec, Point};
use seal_core::layout::{layout_arc, ArcTextRequest};
use seal_core::rendering::graphics_state::Color;
use seal_core::rendering::primitives::{
    draw_circle, draw_five_point_star, draw_glyph, draw_horizontal_text, draw_line, draw_rectangle,
    draw_rounded_rectangle,
};
use seal_core::rendering::{Device, SkiaDevice, StrokeFont};

fn canvas(width: u32, height: u32) -> SkiaDevice {
    let mut device = SkiaDevice::new(width, height).unwrap();
    device.clear(Color::white());
    device
}

fn is_ink(device: &SkiaDevice, x: u32, y: u32) -> bool {
    let c = device.pixel(x, y).unwrap();
    c.a == 255 && c.r < 64 && c.g < 64 && c.b < 64
}

fn is_paper(device: &SkiaDevice, x: u32, y: u32) -> bool {
    device.pixel(x, y).unwrap() == Color::white()
}

#[test]
fn test_circle_outline() {
    let mut device = canvas(100, 100);
    draw_circle(&mut device, Point::new(50.0, 50.0), 40.0, 3.0).unwrap();

    assert!(is_ink(&device, 89, 50));
    assert!(is_ink(&device, 10, 50));
    assert!(is_ink(&device, 50, 10));
    // Stroked, not filled
    assert!(is_paper(&device, 50, 50));
    assert!(is_paper(&device, 2, 2));
}

#[test]
fn test_rectangle_outline() {
    let mut device = canvas(100, 100);
    draw_rectangle(&mut device, Bounds::new(20.0, 20.0, 60.0, 40.0), 2.0).unwrap();

    assert!(is_ink(&device, 50, 20));
    assert!(is_ink(&device, 20, 40));
    assert!(is_ink(&device, 79, 40));
    assert!(is_paper(&device, 50, 40));
}

#[test]
fn test_rounded_corners_stay_clear() {
    let mut device = canvas(100, 100);
    draw_rounded_rectangle(&mut device, Bounds::new(10.0, 10.0, 80.0, 80.0), 20.0, 2.0).unwrap();

    // Straight edge is inked, the square corner is cut off
    assert!(is_ink(&device, 50, 10));
    assert!(is_paper(&device, 11, 11));
}

#[test]
fn test_star_outline() {
    let mut device = canvas(100, 100);
    draw_five_point_star(&mut device, Point::new(50.0, 50.0), 40.0, 16.0, 2.0).unwrap();

    // Top point and the hollow center
    assert!(is_ink(&device, 50, 11));
    assert!(is_paper(&device, 50, 50));
}

#[test]
fn test_line() {
    let mut device = canvas(100, 20);
    draw_line(&mut device, Point::new(10.0, 10.0), Point::new(90.0, 10.0), 2.0).unwrap();

    assert!(is_ink(&device, 50, 9));
    assert!(is_paper(&device, 50, 14));
    assert!(is_paper(&device, 95, 9));
}

#[test]
fn test_horizontal_text_sits_on_its_baseline() {
    let mut device = canvas(200, 60);
    let font = FontSpec::regular("Arial", 20.0);
    draw_horizontal_text(&mut device, &StrokeFont::new(), Point::new(10.0, 40.0), "LIL", &font, true).unwrap();

    let inked: Vec<(u32, u32)> = (0..200)
        .flat_map(|x| (0..60).map(move |y| (x, y)))
        .filter(|&(x, y)| is_ink(&device, x, y))
        .collect();
    assert!(!inked.is_empty());
    // Nothing drawn well below the baseline or left of the pen origin
    assert!(inked.iter().all(|&(_, y)| y <= 43));
    assert!(inked.iter().all(|&(x, _)| x >= 8));
}

#[test]
fn test_arc_glyphs_land_on_the_circle() {
    let mut device = canvas(200, 200);
    let font = FontSpec::bold("Times New Roman", 16.0);
    let stroke = StrokeFont::new();
    let circle = Circle::new(Point::new(100.0, 100.0), 70.0).unwrap();
    let req = ArcTextRequest::new("TOP", circle, font.clone());

    let layout = layout_arc(&req, &stroke).unwrap();
    for placement in &layout.placements {
        draw_glyph(&mut device, &stroke, placement, &font).unwrap();
    }

    // Caption centered at the top: ink just above y = 30, none in the lower half
    let top_band = (85..115).any(|x| (18..31).any(|y| is_ink(&device, x, y)));
    assert!(top_band);
    let lower_half = (0..200).any(|x| (110..200).any(|y| is_ink(&device, x, y)));
    assert!(!lower_half);
}
