// File: crates/bubble-core/src/scene.rs
// Summary: Renderer-agnostic display list in chart-area coordinates (margins applied by backends).

use skia_safe as skia;

use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line {
        from: Point,
        to: Point,
        color: skia::Color,
        width: f32,
    },
    Rect {
        rect: RectF,
        fill: skia::Color,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: skia::Color,
        opacity: f32,
        /// Index of the record this mark encodes.
        record: usize,
        /// Hover text carried into vector output.
        title: Option<String>,
    },
    Text {
        text: String,
        at: Point,
        size: f32,
        color: skia::Color,
        anchor: Anchor,
        /// Baseline shift in ems (positive moves the text down).
        dy_em: f32,
        /// Glyphs run top to bottom instead of left to right.
        vertical: bool,
    },
}

/// A translated group of elements, like an SVG `<g>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub class: &'static str,
    pub offset: Point,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn new(class: &'static str) -> Self {
        Self { class, offset: Point::default(), elements: Vec::new() }
    }

    pub fn at(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

/// Layers in paint order; later layers draw over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.layers.iter().flat_map(|l| l.elements.iter())
    }

    pub fn circle_count(&self) -> usize {
        self.elements().filter(|e| matches!(e, Element::Circle { .. })).count()
    }
}
