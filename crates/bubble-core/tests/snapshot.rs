// File: crates/bubble-core/tests/snapshot.rs
// Purpose: Golden PNG snapshots (labels off) for both themes, with a bless flow:
// UPDATE_SNAPSHOTS=1 rewrites, otherwise decoded pixels must match. Without a
// blessed file the render is still checked at known background and mark pixels.

use bubble_core::{Chart, Dataset, Record, RenderOptions, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn assert_rgb_near(img: &image::RgbaImage, x: u32, y: u32, want: [u8; 3]) {
    let px = img.get_pixel(x, y).0;
    for c in 0..3 {
        let d = (px[c] as i32 - want[c] as i32).abs();
        assert!(d <= 3, "pixel ({x},{y}) = {:?}, want about {:?}", &px[..3], want);
    }
}

/// Background corner and the interior of mark B (income 2000, life 80,
/// population 400 → surface (610, 40), r = 20; region Y → #f28e2c at 50%).
fn check_known_pixels(bytes: &[u8], background: [u8; 3], mark: [u8; 3]) {
    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (650, 500));
    assert_rgb_near(&img, 5, 5, background);
    assert_rgb_near(&img, 610, 50, mark);
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if !path.exists() {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
        return;
    }
    let want = std::fs::read(&path).expect("read snapshot");
    let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
}

fn render(theme: Theme) -> Vec<u8> {
    let data = Dataset::new(vec![
        Record::new("A", 1000.0, 50.0, 100.0, "X"),
        Record::new("B", 2000.0, 80.0, 400.0, "Y"),
        Record::new("C", 1500.0, 65.0, 250.0, "Z"),
        Record::new("D", 1800.0, 72.0, 150.0, "X"),
    ]);
    let opts = RenderOptions { theme, draw_labels: false, ..RenderOptions::default() };
    Chart::build(data, opts).render_to_png_bytes().expect("render bytes")
}

#[test]
fn golden_light() {
    let bytes = render(Theme::light());
    check_known_pixels(&bytes, [255, 255, 255], [249, 199, 150]);
    write_or_compare("bubble_light.png", &bytes);
}

#[test]
fn golden_dark() {
    let bytes = render(Theme::dark());
    check_known_pixels(&bytes, [18, 18, 20], [130, 80, 32]);
    write_or_compare("bubble_dark.png", &bytes);
}
