// File: crates/bubble-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG file/bytes, RGBA buffer with tooltip, SVG text.

use bubble_core::geometry::Point;
use bubble_core::{ingest, Chart, HoverState, RenderOptions};

const CSV: &str = "\
Country,Income,LifeExpectancy,Population,Region
Norway,64020,81.6,5080000,Europe & Central Asia
India,5390,67.2,1295000000,South Asia
Chad,2080,51.6,13590000,Sub-Saharan Africa
Brazil,15440,74.4,206100000,America
Japan,36620,83.6,127100000,East Asia & Pacific
Niger,950,61.5,19110000,Sub-Saharan Africa
";

fn chart(opts: RenderOptions) -> Chart {
    Chart::build(ingest::from_str(CSV).expect("ingest"), opts)
}

#[test]
fn render_smoke_png() {
    let chart = chart(RenderOptions::default());
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer_with_tooltip() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let chart = chart(opts);

    let (plain, w, h, stride) = chart.render_to_rgba8(None).expect("rgba render");
    assert_eq!((w, h), (650, 500));
    assert_eq!(w as usize * h as usize * 4, plain.len());
    assert_eq!(stride, w as usize * 4);
    // White background, fully opaque.
    assert_eq!(&plain[0..4], &[255, 255, 255, 255]);

    let mut hover = HoverState::new();
    let norway = chart.marks[0].center;
    let at = Point::new(norway.x + 40.0, norway.y + 40.0);
    assert!(chart.pointer_moved(&mut hover, at));
    let (with_tip, ..) = chart.render_to_rgba8(Some(hover.tooltip())).expect("rgba render");
    assert_ne!(plain, with_tip, "tooltip should change pixels");
}

#[test]
fn svg_has_one_circle_per_record_with_titles() {
    let chart = chart(RenderOptions::default());
    let doc = chart.to_svg_string();
    assert!(doc.starts_with("<svg"));
    assert_eq!(doc.matches("<circle").count(), 6);
    assert_eq!(doc.matches("<title>").count(), 6);
    assert!(doc.contains("<title>Country: Norway\nLife Expectancy: 81.6\nIncome: 64.02k\nPopulation: 5.080M\nRegion: Europe &amp; Central Asia</title>"));
    assert!(doc.contains(r#"writing-mode="vertical-lr""#));
    assert!(doc.contains(">Life Expectancy</text>"));
    assert!(doc.contains(r#"opacity="0.5""#));

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&out).expect("write svg");
    assert_eq!(std::fs::read_to_string(&out).expect("read svg"), doc);
}

#[test]
fn svg_escapes_markup_in_labels() {
    let csv = "Country,Income,LifeExpectancy,Population,Region\n<b>,1,2,3,R&D\n";
    let chart = Chart::build(ingest::from_str(csv).expect("ingest"), RenderOptions::default());
    let doc = chart.to_svg_string();
    assert!(doc.contains(">R&amp;D</text>"));
    assert!(doc.contains("Country: &lt;b&gt;"));
    assert!(!doc.contains("<b>"));
}

/// Accepts `room` bytes, then refuses every write.
struct Limited {
    buf: String,
    room: usize,
}

impl std::fmt::Write for Limited {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if self.buf.len() + s.len() > self.room {
            return Err(std::fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

#[test]
fn svg_writer_reports_sink_errors() {
    let chart = chart(RenderOptions::default());
    let o = &chart.options;
    let full = chart.to_svg_string();

    let mut sink = Limited { buf: String::new(), room: full.len() };
    bubble_core::svg::write_svg(&mut sink, &chart.scene, o.width, o.height, o.origin(), o.theme.background)
        .expect("fits");
    assert_eq!(sink.buf, full);

    let mut short = Limited { buf: String::new(), room: full.len() / 2 };
    let res = bubble_core::svg::write_svg(&mut short, &chart.scene, o.width, o.height, o.origin(), o.theme.background);
    assert!(res.is_err());
    assert!(short.buf.len() <= full.len() / 2);
}
