// File: crates/bubble-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the categorical palette.

use skia_safe as skia;

/// Number of entries in the categorical palette.
pub const PALETTE_LEN: usize = 10;

/// Tableau10, in order.
pub fn tableau10() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_rgb(0x4e, 0x79, 0xa7),
        skia::Color::from_rgb(0xf2, 0x8e, 0x2c),
        skia::Color::from_rgb(0xe1, 0x57, 0x59),
        skia::Color::from_rgb(0x76, 0xb7, 0xb2),
        skia::Color::from_rgb(0x59, 0xa1, 0x4f),
        skia::Color::from_rgb(0xed, 0xc9, 0x49),
        skia::Color::from_rgb(0xaf, 0x7a, 0xa1),
        skia::Color::from_rgb(0xff, 0x9d, 0xa7),
        skia::Color::from_rgb(0x9c, 0x75, 0x5f),
        skia::Color::from_rgb(0xba, 0xb0, 0xab),
    ]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_label: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
    /// Fill for marks whose region is not in the palette domain.
    pub unknown: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_label: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_fill: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 120, 120, 130),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            unknown: skia::Color::from_argb(255, 150, 150, 160),
            palette: tableau10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            tooltip_fill: skia::Color::from_argb(235, 40, 40, 45),
            tooltip_border: skia::Color::from_argb(255, 150, 150, 160),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            unknown: skia::Color::from_argb(255, 100, 100, 110),
            palette: tableau10(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
