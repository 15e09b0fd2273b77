use super::draw_arc;
use crate::core::config::SERIF_FAMILY;
use crate::core::{Circle, CircleSeal, CircleSealLayout, Direction, FontSpec, Orientation, Point, SealResult};
use crate::layout::{ArcTextRequest, ExactLayout};
use crate::rendering::font::Typeface;
use crate::rendering::graphics_state::Color;
use crate::rendering::primitives::{draw_circle, draw_horizontal_text};
use crate::rendering::Device;

/// Round seal: two border rings, captions in the ring between them, the
/// inner words inside the small ring and two centered label lines.
pub(super) fn draw_circle_seal(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    layout: &CircleSealLayout,
    seal: &CircleSeal,
) -> SealResult<()> {
    let center = Point::new(f64::from(layout.width) / 2.0, f64::from(layout.height) / 2.0);

    device.clear(Color::transparent());
    draw_circle(device, center, layout.outer_radius, layout.border_width)?;
    draw_circle(device, center, layout.inner_radius, layout.border_width)?;

    let ring = layout.ring_baseline();
    let inner_word_radius = layout.inner_radius - layout.inner_word_inset;
    let caption_font = FontSpec::regular(SERIF_FAMILY, layout.caption_size);
    let word_font = FontSpec::bold(SERIF_FAMILY, layout.inner_word_size);

    let arcs = [
        top_arc(&seal.upper_text, Circle::new(center, ring - layout.caption_inset)?, &caption_font),
        bottom_arc(&seal.lower_text, Circle::new(center, ring + layout.caption_inset)?, &caption_font),
        top_arc(&seal.inner_word_upper, Circle::new(center, inner_word_radius)?, &word_font),
        bottom_arc(
            &seal.inner_word_lower,
            Circle::new(center, inner_word_radius + layout.inner_word_lower_offset)?,
            &word_font,
        ),
    ];
    for arc in &arcs {
        draw_arc(device, typeface, &ExactLayout, arc)?;
    }

    draw_labels(device, typeface, layout, center, seal)
}

fn top_arc(text: &str, circle: Circle, font: &FontSpec) -> ArcTextRequest {
    ArcTextRequest::new(text, circle, font.clone())
        .centered_at(90.0)
        .direction(Direction::Clockwise)
        .orientation(Orientation::Outward)
}

fn bottom_arc(text: &str, circle: Circle, font: &FontSpec) -> ArcTextRequest {
    ArcTextRequest::new(text, circle, font.clone())
        .centered_at(270.0)
        .direction(Direction::CounterClockwise)
        .orientation(Orientation::Inward)
}

/// The expiry and id lines, centered as a block on the canvas.
fn draw_labels(
    device: &mut dyn Device,
    typeface: &dyn Typeface,
    layout: &CircleSealLayout,
    center: Point,
    seal: &CircleSeal,
) -> SealResult<()> {
    let font = FontSpec::regular(SERIF_FAMILY, layout.label_size);
    let expires = format!("Expires: {}", seal.expiry_date);
    let notary_id = format!("Notary ID: {}", seal.notary_id);

    let first = typeface.line_metrics(&expires, &font)?;
    let second = typeface.line_metrics(&notary_id, &font)?;
    let block_height = first.height + second.height + layout.line_spacing;
    let first_baseline = center.y - block_height / 2.0 + first.height;
    let second_baseline = first_baseline + first.height + layout.line_spacing;

    draw_horizontal_text(
        device,
        typeface,
        Point::new(center.x - first.width / 2.0, first_baseline),
        &expires,
        &font,
        false,
    )?;
    draw_horizontal_text(
        device,
        typeface,
        Point::new(center.x - second.width / 2.0, second_baseline),
        &notary_id,
        &font,
        false,
    )
}
