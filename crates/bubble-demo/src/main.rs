// File: crates/bubble-demo/src/main.rs
// Summary: CLI that loads a wealth/health CSV and renders the bubble chart to PNG and/or SVG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bubble_core::{ingest, theme, Chart, Dataset, RenderOptions};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

/// Render income vs. life expectancy as a bubble chart
#[derive(Parser, Debug)]
#[command(name = "bubble-demo", about, long_about = None)]
struct Args {
    /// Input CSV with Country, Income, LifeExpectancy, Population, Region columns ("-" for stdin)
    #[arg(value_name = "INPUT", default_value = "wealth-health-2014.csv")]
    input: PathBuf,

    /// Directory the rendered files are written to
    #[arg(short, long, value_name = "DIR", default_value = "target/out")]
    out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Color theme (light, dark)
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Skip all text (ticks, titles, legend labels)
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let dataset = load(&args.input)?;
    info!(records = dataset.len(), "loaded {}", args.input.display());

    let opts = RenderOptions {
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        ..RenderOptions::default()
    };
    let chart = Chart::build(dataset, opts);

    let stem = out_stem(&args.input);
    if matches!(args.format, Format::Png | Format::Both) {
        let out = args.out_dir.join(format!("{stem}.png"));
        chart.render_to_png(&out)?;
        println!("Wrote {}", out.display());
    }
    if matches!(args.format, Format::Svg | Format::Both) {
        let out = args.out_dir.join(format!("{stem}.svg"));
        chart.render_to_svg(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn load(input: &Path) -> Result<Dataset> {
    if input.as_os_str() == "-" {
        return ingest::from_reader(std::io::stdin().lock()).context("failed to load CSV from stdin");
    }
    ingest::from_path(input).with_context(|| format!("failed to load CSV '{}'", input.display()))
}

/// Output file stem like `chart_<input stem>`.
fn out_stem(input: &Path) -> String {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if stem != "-" && !stem.is_empty() => format!("chart_{stem}"),
        _ => "chart".to_string(),
    }
}
