// File: crates/bubble-core/src/marks.rs
// Summary: One circle per record, positioned and styled through the shared scales; hit testing.

use skia_safe as skia;

use crate::geometry::Point;
use crate::record::Dataset;
use crate::scale::Scales;
use crate::scene::{Element, Layer};
use crate::theme::Theme;
use crate::tooltip;
use crate::types::MARK_OPACITY;

#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Index into the dataset.
    pub record: usize,
    pub center: Point,
    pub radius: f32,
    pub fill: skia::Color,
    pub opacity: f32,
}

impl Mark {
    /// Whether `p` (chart coordinates) falls on this circle.
    pub fn contains(&self, p: Point) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.center.distance_sq(p) <= self.radius * self.radius
    }
}

/// Build marks in dataset order. Missing or malformed numbers are not
/// filtered; they produce non-finite geometry.
pub fn build(data: &Dataset, scales: &Scales, theme: &Theme) -> Vec<Mark> {
    data.iter()
        .enumerate()
        .map(|(i, r)| Mark {
            record: i,
            center: Point::new(scales.income.apply(r.income), scales.life.apply(r.life_expectancy)),
            radius: scales.population.apply(r.population),
            fill: scales.region.color(&r.region).unwrap_or(theme.unknown),
            opacity: MARK_OPACITY,
        })
        .collect()
}

/// Topmost (last painted) mark under `p`, as an index into `marks`.
pub fn hit_test(marks: &[Mark], p: Point) -> Option<usize> {
    marks.iter().rposition(|m| m.contains(p))
}

pub fn layer(marks: &[Mark], data: &Dataset) -> Layer {
    let mut layer = Layer::new("marks");
    for m in marks {
        layer.push(Element::Circle {
            center: m.center,
            radius: m.radius,
            fill: m.fill,
            opacity: m.opacity,
            record: m.record,
            title: data.get(m.record).map(|r| tooltip::lines(r).join("\n")),
        });
    }
    layer
}
