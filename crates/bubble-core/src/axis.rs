// File: crates/bubble-core/src/axis.rs
// Summary: Axis model (ticks, labels, title) and its drawing into the scene.

use crate::format;
use crate::geometry::Point;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Element, Layer};
use crate::theme::Theme;

/// Length of tick marks, inner and outer.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f32 = 3.0;
pub const TICK_FONT_SIZE: f32 = 10.0;
pub const TITLE_FONT_SIZE: f32 = 12.0;
pub const INCOME_TICKS: usize = 5;
pub const LIFE_TICKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in chart pixels.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub label: String,
    pub at: Point,
    pub vertical: bool,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    /// Where the axis line sits inside the chart area.
    pub origin: Point,
    /// Pixel extent of the axis line.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    pub title: AxisTitle,
}

impl Axis {
    /// Income axis along the bottom edge, SI-suffixed labels.
    pub fn income(scale: &LinearScale, chart_width: f32, chart_height: f32) -> Self {
        let (d0, d1) = scale.domain;
        let fmt = format::si_tick_formatter(d0, d1, scale.tick_step(INCOME_TICKS));
        Self {
            orient: Orient::Bottom,
            origin: Point::new(0.0, chart_height),
            range: scale.range,
            ticks: make_ticks(scale, INCOME_TICKS, fmt),
            title: AxisTitle {
                label: "Income".into(),
                at: Point::new(chart_width - 38.0, chart_height - 10.0),
                vertical: false,
            },
        }
    }

    /// Life expectancy axis along the left edge, plain numeric labels.
    pub fn life_expectancy(scale: &LinearScale) -> Self {
        let fmt = format::fixed_tick_formatter(scale.tick_step(LIFE_TICKS));
        Self {
            orient: Orient::Left,
            origin: Point::new(0.0, 0.0),
            range: scale.range,
            ticks: make_ticks(scale, LIFE_TICKS, fmt),
            title: AxisTitle {
                label: "Life Expectancy".into(),
                at: Point::new(10.0, 0.0),
                vertical: true,
            },
        }
    }

    pub fn class(&self) -> &'static str {
        match self.orient {
            Orient::Bottom => "axis x-axis",
            Orient::Left => "axis y-axis",
        }
    }

    /// Domain line, tick marks and tick labels, translated to the axis origin.
    pub fn layer(&self, theme: &Theme) -> Layer {
        let mut layer = Layer::new(self.class()).at(self.origin);
        let (r0, r1) = (self.range.0.min(self.range.1), self.range.0.max(self.range.1));
        let color = theme.axis_line;

        // Domain path with outer ticks at both ends.
        let (a, b, c, d) = match self.orient {
            Orient::Bottom => (
                Point::new(r0, TICK_SIZE),
                Point::new(r0, 0.0),
                Point::new(r1, 0.0),
                Point::new(r1, TICK_SIZE),
            ),
            Orient::Left => (
                Point::new(-TICK_SIZE, r0),
                Point::new(0.0, r0),
                Point::new(0.0, r1),
                Point::new(-TICK_SIZE, r1),
            ),
        };
        for (from, to) in [(a, b), (b, c), (c, d)] {
            layer.push(Element::Line { from, to, color, width: 1.0 });
        }

        for t in &self.ticks {
            let (from, to, at, anchor, dy_em) = match self.orient {
                Orient::Bottom => (
                    Point::new(t.offset, 0.0),
                    Point::new(t.offset, TICK_SIZE),
                    Point::new(t.offset, TICK_SIZE + TICK_PADDING),
                    Anchor::Middle,
                    0.71,
                ),
                Orient::Left => (
                    Point::new(0.0, t.offset),
                    Point::new(-TICK_SIZE, t.offset),
                    Point::new(-(TICK_SIZE + TICK_PADDING), t.offset),
                    Anchor::End,
                    0.32,
                ),
            };
            layer.push(Element::Line { from, to, color, width: 1.0 });
            layer.push(Element::Text {
                text: t.label.clone(),
                at,
                size: TICK_FONT_SIZE,
                color: theme.axis_label,
                anchor,
                dy_em,
                vertical: false,
            });
        }
        layer
    }

    /// The axis title, placed in chart coordinates (not relative to the axis origin).
    pub fn title_element(&self, theme: &Theme) -> Element {
        Element::Text {
            text: self.title.label.clone(),
            at: self.title.at,
            size: TITLE_FONT_SIZE,
            color: theme.title,
            anchor: Anchor::Start,
            dy_em: 0.0,
            vertical: self.title.vertical,
        }
    }
}

fn make_ticks(scale: &LinearScale, count: usize, fmt: impl Fn(f64) -> String) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick { value, offset: scale.apply(value), label: fmt(value) })
        .collect()
}
