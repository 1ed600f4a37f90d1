// File: crates/bubble-core/src/lib.rs
// Summary: Core library entry point; exports the bubble chart pipeline (ingest, scales, chart, output).

pub mod axis;
pub mod chart;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod ingest;
pub mod legend;
pub mod marks;
pub mod raster;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use ingest::IngestError;
pub use legend::Legend;
pub use marks::Mark;
pub use record::{Dataset, Field, Record};
pub use scale::{Categories, LinearScale, OrdinalScale, Scales, SqrtScale};
pub use scene::Scene;
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{HoverState, Tooltip};
