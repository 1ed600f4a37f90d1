// File: crates/bubble-window/src/main.rs
// Summary: Windowed bubble chart with hover tooltips; renders via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bubble_core::geometry::Point;
use bubble_core::{ingest, theme, Chart, HoverState, RenderOptions};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Interactive bubble chart: hover a bubble to see its country's figures
#[derive(Parser, Debug)]
#[command(name = "bubble-window", about, long_about = None)]
struct Args {
    /// Input CSV with Country, Income, LifeExpectancy, Population, Region columns
    #[arg(value_name = "INPUT", default_value = "wealth-health-2014.csv")]
    input: PathBuf,

    /// Color theme (light, dark)
    #[arg(short, long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    // Nothing is drawn until the whole file has been ingested.
    let dataset = ingest::from_path(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(records = dataset.len(), "loaded {}", args.input.display());

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let chart = Chart::build(dataset, opts);
    let mut hover = HoverState::new();

    // Fixed size: the chart is laid out once and never rescaled.
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Wealth & Health of Nations")
        .with_inner_size(PhysicalSize::new(opts.width as u32, opts.height as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut draw = move |chart: &Chart, hover: &HoverState| -> Result<()> {
        let size = window_size(&chart.options);
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;

        let (rgba, _, _, _) = chart.render_to_rgba8(Some(hover.tooltip()))?;
        let mut frame = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("frame: {e}"))?;
        let max_px = frame.len().min(rgba.len() / 4);
        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            // softbuffer expects 0RGB
            frame[i] = (r << 16) | (g << 8) | b;
        }
        frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = Point::new(position.x as f32, position.y as f32);
                    if chart.pointer_moved(&mut hover, p) {
                        debug!(hovered = ?hover.hovered(), "hover changed");
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if chart.pointer_left(&mut hover) {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&chart, &hover) {
                    error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    })
}

fn window_size(opts: &RenderOptions) -> PhysicalSize<u32> {
    PhysicalSize::new(opts.width.max(1) as u32, opts.height.max(1) as u32)
}
