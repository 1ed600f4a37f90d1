// File: crates/bubble-core/src/scale.rs
// Summary: Value-to-pixel (linear, sqrt) and category-to-color scales derived from a dataset.

use skia_safe as skia;
use tracing::debug;

use crate::grid;
use crate::record::Dataset;
use crate::types::{MAX_RADIUS, MIN_RADIUS};

/// Data-domain value (income, years, head count).
pub type Value = f64;

/// Maps a closed domain linearly onto a pixel range. A zero-width domain
/// maps every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: Value) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            if v.is_nan() {
                return f32::NAN;
            }
            return ((r0 + r1) * 0.5) as f32;
        }
        (r0 + (v - d0) / span * (r1 - r0)) as f32
    }

    #[inline]
    pub fn invert(&self, px: f32) -> Value {
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px as f64 - r0) / span * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> Value {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}

fn signed_sqrt(v: Value) -> Value {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}

/// Linear interpolation between the square roots of the domain ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    pub domain: (Value, Value),
    inner: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        let inner = LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range);
        Self { domain, inner }
    }

    #[inline]
    pub fn apply(&self, v: Value) -> f32 {
        self.inner.apply(signed_sqrt(v))
    }
}

/// Distinct categories in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Categories {
    names: Vec<String>,
}

impl Categories {
    /// Append `name` unless already present.
    pub fn insert(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Some(i) => i,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Category-to-color lookup; colors are assigned in category order and wrap
/// around the palette.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    categories: Categories,
    palette: Vec<skia::Color>,
}

impl OrdinalScale {
    pub fn new(categories: Categories, palette: &[skia::Color]) -> Self {
        Self { categories, palette: palette.to_vec() }
    }

    /// The category order used for both color assignment and the legend.
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn color_at(&self, index: usize) -> Option<skia::Color> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()])
    }

    pub fn color(&self, category: &str) -> Option<skia::Color> {
        self.categories.index_of(category).and_then(|i| self.color_at(i))
    }
}

/// Running min/max over finite values only.
#[derive(Clone, Copy, Debug)]
struct Extent {
    min: Value,
    max: Value,
}

impl Extent {
    fn new() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }
    fn push(&mut self, v: Value) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }
    /// `(min, max)`, or `(0, 0)` if nothing was observed.
    fn bounds(&self) -> (Value, Value) {
        if self.min > self.max { (0.0, 0.0) } else { (self.min, self.max) }
    }
}

/// The four scales every chart stage reads. Built once per dataset.
#[derive(Clone, Debug)]
pub struct Scales {
    pub income: LinearScale,
    pub life: LinearScale,
    pub region: OrdinalScale,
    pub population: SqrtScale,
}

impl Scales {
    /// Derive all scales in a single pass over `data`.
    pub fn from_dataset(data: &Dataset, chart_width: f32, chart_height: f32, palette: &[skia::Color]) -> Self {
        let mut income = Extent::new();
        let mut life = Extent::new();
        let mut pop = Extent::new();
        let mut regions = Categories::default();
        for r in data {
            income.push(r.income);
            life.push(r.life_expectancy);
            pop.push(r.population);
            regions.insert(&r.region);
        }

        let (life_min, life_max) = life.bounds();
        debug!(
            income = ?income.bounds(),
            life = ?life.bounds(),
            population = ?pop.bounds(),
            regions = regions.len(),
            "scales derived"
        );
        Self {
            income: LinearScale::new(income.bounds(), (0.0, chart_width)),
            // max first: larger life expectancy plots higher
            life: LinearScale::new((life_max, life_min), (0.0, chart_height)),
            region: OrdinalScale::new(regions, palette),
            population: SqrtScale::new(pop.bounds(), (MIN_RADIUS, MAX_RADIUS)),
        }
    }
}
