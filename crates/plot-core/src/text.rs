// File: crates/plot-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with anchored drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for `TextShaper::draw`; the given x maps to this edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with `(x, y)` as the baseline anchor point.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: Anchor,
    ) {
        let mut p = self.layout(text, size, color);
        let width = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - width * 0.5,
            Anchor::Right => x - width,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}
