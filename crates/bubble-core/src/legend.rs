// File: crates/bubble-core/src/legend.rs
// Summary: Categorical legend; one swatch and label per region, in the color scale's order.

use skia_safe as skia;

use crate::geometry::{Point, RectF};
use crate::scale::OrdinalScale;
use crate::scene::{Anchor, Element, Layer};
use crate::theme::Theme;
use crate::types::{LEGEND_RIGHT_OFFSET, LEGEND_ROW_HEIGHT, LEGEND_TOP};

pub const SWATCH_SIZE: f32 = 15.0;
pub const LABEL_FONT_SIZE: f32 = 11.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub category: String,
    pub color: skia::Color,
    pub swatch: RectF,
    pub label_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub origin: Point,
    pub rows: Vec<LegendRow>,
}

impl Legend {
    /// Lay out one row per category of `colors`, stacked downward from the
    /// legend origin near the right edge of the chart area.
    pub fn new(colors: &OrdinalScale, chart_width: f32, theme: &Theme) -> Self {
        let origin = Point::new(chart_width - LEGEND_RIGHT_OFFSET, LEGEND_TOP);
        let rows = colors
            .categories()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let y = origin.y + i as f32 * LEGEND_ROW_HEIGHT;
                LegendRow {
                    category: category.to_string(),
                    color: colors.color_at(i).unwrap_or(theme.unknown),
                    swatch: RectF::from_xywh(origin.x, y - 10.0, SWATCH_SIZE, SWATCH_SIZE),
                    label_at: Point::new(origin.x + 18.0, y + 2.0),
                }
            })
            .collect();
        Self { origin, rows }
    }

    pub fn layer(&self, theme: &Theme) -> Layer {
        let mut layer = Layer::new("legend");
        for row in &self.rows {
            layer.push(Element::Rect { rect: row.swatch, fill: row.color });
        }
        for row in &self.rows {
            layer.push(Element::Text {
                text: row.category.clone(),
                at: row.label_at,
                size: LABEL_FONT_SIZE,
                color: theme.legend_label,
                anchor: Anchor::Start,
                dy_em: 0.0,
                vertical: false,
            });
        }
        layer
    }
}
