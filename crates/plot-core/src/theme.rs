// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
}

impl Theme {
    /// White-background theme; the default for exported figures.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 224, 224, 229),
            axis_line: skia::Color::from_argb(255, 38, 38, 44),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick_label: skia::Color::from_argb(255, 52, 52, 60),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            marker_fill: skia::Color::from_argb(255, 31, 119, 180),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 200, 200, 210),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
