// File: crates/bubble-core/src/raster.rs
// Summary: Skia CPU painting of a scene and the tooltip overlay.

use skia_safe as skia;

use crate::geometry::Point;
use crate::scene::{Element, Scene};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

pub const TOOLTIP_FONT_SIZE: f32 = 12.0;
pub const TOOLTIP_PADDING: f32 = 6.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 16.0;

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

/// Paint every layer of `scene`, offset by `origin` (the top-left margin).
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, origin: Point, shaper: Option<&TextShaper>) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for layer in &scene.layers {
        canvas.save();
        canvas.translate((origin.x + layer.offset.x, origin.y + layer.offset.y));
        for el in &layer.elements {
            match el {
                Element::Line { from, to, color, width } => {
                    stroke.set_color(*color);
                    stroke.set_stroke_width(*width);
                    canvas.draw_line(sk_point(*from), sk_point(*to), &stroke);
                }
                Element::Rect { rect, fill: color } => {
                    fill.set_color(*color);
                    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                    canvas.draw_rect(r, &fill);
                }
                Element::Circle { center, radius, fill: color, opacity, .. } => {
                    if !center.is_finite() || !radius.is_finite() {
                        continue;
                    }
                    fill.set_color(*color);
                    fill.set_alpha_f(*opacity);
                    canvas.draw_circle(sk_point(*center), *radius, &fill);
                }
                Element::Text { text, at, size, color, anchor, dy_em, vertical } => {
                    let Some(shaper) = shaper else { continue };
                    let y = at.y + dy_em * size;
                    if *vertical {
                        shaper.draw_vertical(canvas, text, at.x, y, *size, *color);
                    } else {
                        shaper.draw(canvas, text, at.x, y, *size, *color, *anchor);
                    }
                }
            }
        }
        canvas.restore();
    }
}

/// Paint the tooltip box at its absolute surface position; nothing when hidden.
pub fn paint_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, theme: &Theme, shaper: &TextShaper) {
    let Tooltip::Shown { at, lines } = tooltip else { return };

    let text_w = lines
        .iter()
        .map(|l| shaper.measure_width(l, TOOLTIP_FONT_SIZE))
        .fold(0.0f32, f32::max);
    let w = text_w + TOOLTIP_PADDING * 2.0;
    let h = lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;
    let rect = skia::Rect::from_xywh(at.x, at.y, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.tooltip_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    for (i, line) in lines.iter().enumerate() {
        let baseline = at.y + TOOLTIP_PADDING + (i as f32 + 1.0) * TOOLTIP_LINE_HEIGHT - 4.0;
        shaper.draw(
            canvas,
            line,
            at.x + TOOLTIP_PADDING,
            baseline,
            TOOLTIP_FONT_SIZE,
            theme.tooltip_text,
            crate::scene::Anchor::Start,
        );
    }
}
