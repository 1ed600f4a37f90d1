// File: crates/bubble-core/src/svg.rs
// Summary: SVG serialization of a scene; marks carry <title> children so viewers show hover text.

use std::fmt;

use skia_safe as skia;

use crate::geometry::Point;
use crate::scene::{Anchor, Element, Scene};

/// XML 1.0 allows tab, LF, CR, and everything from U+0020 except surrogates and U+FFFE/U+FFFF.
fn is_valid_xml_char(c: char) -> bool {
    matches!(c as u32, 0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF)
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars().filter(|&c| is_valid_xml_char(c)) {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Trim float noise; non-finite values print as `NaN` like a browser would.
fn num(v: f32) -> String {
    if !v.is_finite() {
        return "NaN".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() { format!("{}", r as i64) } else { format!("{r}") }
}

fn anchor_attr(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Serialize `scene` as a standalone SVG document of `width`×`height`,
/// with the chart area translated to `origin`.
pub fn write_svg<W: fmt::Write>(
    out: &mut W,
    scene: &Scene,
    width: i32,
    height: i32,
    origin: Point,
    background: skia::Color,
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(background))?;
    writeln!(out, r#"<g transform="translate({},{})">"#, num(origin.x), num(origin.y))?;

    for layer in &scene.layers {
        writeln!(
            out,
            r#"<g class="{}" transform="translate({},{})" font-family="sans-serif">"#,
            layer.class,
            num(layer.offset.x),
            num(layer.offset.y)
        )?;
        for el in &layer.elements {
            write_element(out, el)?;
        }
        out.write_str("</g>\n")?;
    }

    out.write_str("</g>\n</svg>\n")
}

fn write_element<W: fmt::Write>(out: &mut W, el: &Element) -> fmt::Result {
    match el {
        Element::Line { from, to, color, width } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            num(from.x), num(from.y), num(to.x), num(to.y), hex(*color), num(*width)
        ),
        Element::Rect { rect, fill } => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(rect.left), num(rect.top), num(rect.width()), num(rect.height()), hex(*fill)
        ),
        Element::Circle { center, radius, fill, opacity, record, title } => {
            write!(
                out,
                r#"<circle class="city-circle" data-record="{record}" cx="{}" cy="{}" r="{}" fill="{}" opacity="{}">"#,
                num(center.x), num(center.y), num(*radius), hex(*fill), num(*opacity)
            )?;
            if let Some(t) = title {
                write!(out, "<title>{}</title>", escape_xml(t))?;
            }
            out.write_str("</circle>\n")
        }
        Element::Text { text, at, size, color, anchor, dy_em, vertical } => {
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}px" fill="{}" text-anchor="{}""#,
                num(at.x), num(at.y), num(*size), hex(*color), anchor_attr(*anchor)
            )?;
            if *dy_em != 0.0 {
                write!(out, r#" dy="{}em""#, num(*dy_em))?;
            }
            if *vertical {
                out.write_str(r#" writing-mode="vertical-lr""#)?;
            }
            writeln!(out, ">{}</text>", escape_xml(text))
        }
    }
}
