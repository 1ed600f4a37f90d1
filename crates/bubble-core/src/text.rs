// File: crates/bubble-core/src/text.rs
// Summary: Text shaping/drawing via Skia textlayout; anchors and vertical runs for chart labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::Anchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0)).longest_line()
    }

    /// Draw `text` with its baseline at `y`, aligned on `x` per `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let mut p = self.layout(text, size, color);
        let dx = match anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -p.longest_line() * 0.5,
            Anchor::End => -p.longest_line(),
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x + dx, y - size * 0.8));
    }

    /// Draw `text` running downward from (`x`, `y`), glyphs rotated a quarter turn.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(90.0, Some(skia::Point::new(x, y)));
        // Center the rotated run on x.
        self.draw(canvas, text, x, y + size * 0.35, size, color, Anchor::Start);
        canvas.restore();
    }
}
