// File: crates/bubble-core/src/tooltip.rs
// Summary: Hover tooltip state (hidden/shown) and the pointer tracking that drives it.

use tracing::trace;

use crate::format::format_si;
use crate::geometry::Point;
use crate::record::Record;

/// Tooltip contents for one record, one line per field.
pub fn lines(r: &Record) -> Vec<String> {
    vec![
        format!("Country: {}", r.country),
        format!("Life Expectancy: {}", format_si(r.life_expectancy, 3)),
        format!("Income: {}", format_si(r.income, 4)),
        format!("Population: {}", format_si(r.population, 4)),
        format!("Region: {}", r.region),
    ]
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tooltip {
    #[default]
    Hidden,
    Shown {
        /// Top-left corner in surface coordinates.
        at: Point,
        lines: Vec<String>,
    },
}

impl Tooltip {
    pub fn is_visible(&self) -> bool {
        matches!(self, Tooltip::Shown { .. })
    }

    /// All lines joined, empty when hidden.
    pub fn text(&self) -> String {
        match self {
            Tooltip::Hidden => String::new(),
            Tooltip::Shown { lines, .. } => lines.join("\n"),
        }
    }
}

/// Tracks which mark the pointer is over and keeps the tooltip in step.
/// Each transition replaces the tooltip outright; the latest event wins.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Pointer entered the mark for `record` at surface position `at`.
    pub fn enter(&mut self, mark: usize, record: &Record, at: Point) {
        trace!(mark, country = %record.country, "pointer enter");
        self.hovered = Some(mark);
        self.tooltip = Tooltip::Shown { at, lines: lines(record) };
    }

    /// Pointer left the hovered mark.
    pub fn exit(&mut self) {
        if let Some(mark) = self.hovered.take() {
            trace!(mark, "pointer exit");
        }
        self.tooltip = Tooltip::Hidden;
    }
}
