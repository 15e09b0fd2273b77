use super::draw_arc;
use crate::core::config::SANS_FAMILY;
use crate::core::{
    BudgetBands, Bounds, Circle, Direction, FontSpec, Point, RectangleSeal, RectangleSealLayout,
    SealResult,
};
use crate::layout::{ArcTextRequest, BudgetedLayout};
use crate::rendering::font::Typeface;
use crate::rendering::graphics_state::Color;
use crate::rendering::primitives::{
    draw_circle, draw_five_point_star, draw_horizontal_text, draw_line, draw_rectangle, draw_rounded_rectangle,
};
use crate::rendering::Device;

/// Rectangular stamp: a framed round seal on the left with budgeted
/// captions and a star, the signer's details in a column on the right.
pub(super) fn draw_rectangle_seal(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    layout: &RectangleSealLayout,
    bands: BudgetBands,
    seal: &RectangleSeal,
) -> SealResult<()> {
    let width = f64::from(seal.canvas_width);
    let height = f64::from(seal.canvas_height);
    // Integer midline, matching the canvas pixel grid
    let center = Point::new(layout.seal_center_x, f64::from(seal.canvas_height / 2));
    let radius = layout.seal_radius;

    device.clear(Color::white());
    draw_rounded_rectangle(
        device,
        Bounds::new(0.0, 0.0, width, height),
        layout.corner_radius,
        layout.border_width,
    )?;

    let reach = radius + layout.frame_margin;
    draw_rectangle(
        device,
        Bounds::from_corners(center.x - reach, center.y - reach, center.x + reach, center.y + reach),
        layout.frame_width,
    )?;
    draw_circle(device, center, radius, layout.main_circle_width)?;
    draw_circle(device, center, radius - layout.inner_circle_gap, layout.inner_circle_width)?;
    draw_five_point_star(
        device,
        center,
        layout.star_outer_radius,
        layout.star_inner_radius,
        layout.star_width,
    )?;

    let caption_circle = Circle::new(center, radius - layout.caption_inset)?;
    let caption_font = FontSpec::bold(SANS_FAMILY, layout.caption_size);
    let strategy = BudgetedLayout::new(bands);
    let top = ArcTextRequest::new(&seal.top_text, caption_circle, caption_font.clone())
        .direction(Direction::Clockwise)
        .budgeted(layout.caption_spacing);
    let bottom = ArcTextRequest::new(&seal.bottom_text, caption_circle, caption_font)
        .centered_at(270.0)
        .direction(Direction::CounterClockwise)
        .budgeted(layout.caption_spacing);
    draw_arc(device, typeface, &strategy, &top)?;
    draw_arc(device, typeface, &strategy, &bottom)?;

    draw_details(device, typeface, layout, center, radius, seal)
}

/// Name, separator and the labelled id and expiry lines.
fn draw_details(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    layout: &RectangleSealLayout,
    center: Point,
    radius: f64,
    seal: &RectangleSeal,
) -> SealResult<()> {
    let x = center.x + radius + layout.column_gap;
    let label = FontSpec::regular(SANS_FAMILY, layout.label_size);
    let name_font = label.sized(layout.label_size + 6.0);
    let value_font = label.sized(layout.label_size + 2.0);

    let name = seal.signer_name.to_uppercase();
    draw_horizontal_text(device, typeface, Point::new(x, center.y - 40.0), &name, &name_font, true)?;

    // Estimated from the character count, not measured
    let rule_length = seal.signer_name.chars().count() as f64 * name_font.size * layout.separator_ratio;
    let rule_y = center.y - 25.0;
    draw_line(device, Point::new(x, rule_y), Point::new(x + rule_length, rule_y), 1.0)?;

    let lines = [
        ("Notary ID #", &label, false, -10.0),
        (seal.notary_id.as_str(), &value_font, true, 10.0),
        ("My Commission Expires", &label, false, 30.0),
        (seal.expiry_date.as_str(), &value_font, true, 50.0),
    ];
    for (text, font, bold, dy) in lines {
        draw_horizontal_text(device, typeface, Point::new(x, center.y + dy), text, font, bold)?;
    }
    Ok(())
}
