// File: crates/bubble-core/src/chart.rs
// Summary: Chart construction (ingest -> scales -> axes/legend/marks) and headless PNG/SVG output.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::info;

use crate::axis::Axis;
use crate::geometry::Point;
use crate::legend::Legend;
use crate::marks::{self, Mark};
use crate::raster;
use crate::record::Dataset;
use crate::scale::Scales;
use crate::scene::{Layer, Scene};
use crate::svg;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::{HoverState, Tooltip};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (ticks, titles, legend labels). Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Width of the plotting area inside the margins.
    pub fn chart_width(&self) -> f32 {
        (self.width - self.insets.hsum() as i32).max(0) as f32
    }

    /// Height of the plotting area inside the margins.
    pub fn chart_height(&self) -> f32 {
        (self.height - self.insets.vsum() as i32).max(0) as f32
    }

    /// Top-left corner of the plotting area on the surface.
    pub fn origin(&self) -> Point {
        Point::new(self.insets.left as f32, self.insets.top as f32)
    }
}

/// A fully laid-out bubble chart. Everything is computed once in [`Chart::build`]
/// and never changes afterwards.
pub struct Chart {
    pub dataset: Dataset,
    pub scales: Scales,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    pub marks: Vec<Mark>,
    pub scene: Scene,
    pub options: RenderOptions,
}

impl Chart {
    pub fn build(dataset: Dataset, options: RenderOptions) -> Self {
        let theme = options.theme;
        let (w, h) = (options.chart_width(), options.chart_height());

        let scales = Scales::from_dataset(&dataset, w, h, &theme.palette);
        let x_axis = Axis::income(&scales.income, w, h);
        let y_axis = Axis::life_expectancy(&scales.life);
        let legend = Legend::new(&scales.region, w, &theme);
        let marks = marks::build(&dataset, &scales, &theme);

        // Paint order: axes, titles, legend, marks.
        let mut scene = Scene::default();
        scene.push(x_axis.layer(&theme));
        scene.push(y_axis.layer(&theme));
        let mut titles = Layer::new("axis-titles");
        titles.push(x_axis.title_element(&theme));
        titles.push(y_axis.title_element(&theme));
        scene.push(titles);
        scene.push(legend.layer(&theme));
        scene.push(marks::layer(&marks, &dataset));

        info!(records = dataset.len(), regions = legend.rows.len(), "chart built");
        Self { dataset, scales, x_axis, y_axis, legend, marks, scene, options }
    }

    /// Surface coordinates to chart-area coordinates.
    pub fn to_chart_point(&self, surface: Point) -> Point {
        let o = self.options.origin();
        Point::new(surface.x - o.x, surface.y - o.y)
    }

    /// Index of the topmost mark under a surface position.
    pub fn mark_at(&self, surface: Point) -> Option<usize> {
        marks::hit_test(&self.marks, self.to_chart_point(surface))
    }

    /// Feed a pointer position (surface coordinates) into `hover`.
    /// Returns true when the tooltip changed.
    pub fn pointer_moved(&self, hover: &mut HoverState, surface: Point) -> bool {
        let hit = self.mark_at(surface);
        if hit == hover.hovered() {
            return false;
        }
        if hover.hovered().is_some() {
            hover.exit();
        }
        if let Some(i) = hit {
            if let Some(record) = self.dataset.get(self.marks[i].record) {
                hover.enter(i, record, surface);
            }
        }
        true
    }

    /// The pointer left the surface entirely.
    pub fn pointer_left(&self, hover: &mut HoverState) -> bool {
        let changed = hover.hovered().is_some();
        hover.exit();
        changed
    }

    fn paint(&self, canvas: &skia::Canvas, tooltip: Option<&Tooltip>) {
        let opts = &self.options;
        canvas.clear(opts.theme.background);
        let shaper = opts.draw_labels.then(TextShaper::new);
        raster::paint_scene(canvas, &self.scene, opts.origin(), shaper.as_ref());
        if let Some(t) = tooltip.filter(|t| t.is_visible()) {
            let shaper = shaper.unwrap_or_default();
            raster::paint_tooltip(canvas, t, &opts.theme, &shaper);
        }
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        skia::surfaces::raster_n32_premul((self.options.width, self.options.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    /// Render to RGBA8 pixels with an optional tooltip on top.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, tooltip: Option<&Tooltip>) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster_surface()?;
        self.paint(surface.canvas(), tooltip);

        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back surface pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        self.paint(surface.canvas(), None);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        write_file(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }

    pub fn to_svg_string(&self) -> String {
        let o = &self.options;
        let mut doc = String::new();
        // fmt::Write into a String cannot fail.
        let _ = svg::write_svg(&mut doc, &self.scene, o.width, o.height, o.origin(), o.theme.background);
        doc
    }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        let doc = self.to_svg_string();
        write_file(path, doc.as_bytes())?;
        info!(path = %path.display(), bytes = doc.len(), "wrote SVG");
        Ok(())
    }
}

fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
