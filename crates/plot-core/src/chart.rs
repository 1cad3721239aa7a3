// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use thiserror::Error;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::series::{Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::ticks::{format_tick, nice_ticks};
use crate::tight::content_bounds;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Rough tick count per axis before 1/2/5 rounding.
const TICK_TARGET: usize = 8;
/// Tick mark length in pixels.
const TICK_LEN: f32 = 4.0;
/// Title font size in pixels.
const TITLE_FONT_SIZE: f32 = 16.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("PNG encode failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels, axis labels, and the title.
    pub draw_labels: bool,
    /// Draw grid lines at tick positions.
    pub draw_grid: bool,
    /// Crop the output to the padded content bounding box.
    pub tight: bool,
    /// Padding around the content box when `tight` is set, in pixels.
    pub tight_pad: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_grid: false,
            tight: false,
            tight_pad: 8,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Drawn centered above the plot area when set and non-empty.
    pub title: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fit both axes to the joint data bounds, padded by `margin` on each side
    /// as a fraction of the data span. Empty charts fall back to unit ranges;
    /// zero-span ranges are widened by 1.0.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let mx = (x_max - x_min) * margin;
        let my = (y_max - y_min) * margin;
        self.x_axis.min = x_min - mx;
        self.x_axis.max = x_max + mx;
        self.y_axis.min = y_min - my;
        self.y_axis.max = y_max + my;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render and PNG-encode in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and return the raw RGBA8888 buffer as (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.render_surface(opts)?;
        read_rgba(&mut surface)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Plot rect from paddings
        let l = opts.insets.left;
        let t = opts.insets.top;
        let r = opts.width - opts.insets.right;
        let b = opts.height - opts.insets.bottom;

        let shaper = TextShaper::new();
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, TICK_TARGET);

        if opts.draw_grid {
            draw_grid(canvas, theme, l, t, r, b, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);
        }
        draw_axes(canvas, theme, l, t, r, b);
        draw_ticks(
            canvas, &shaper, theme,
            l, t, r, b,
            &self.x_axis, &self.y_axis,
            &x_ticks, &y_ticks,
            opts.draw_labels,
        );
        if opts.draw_labels {
            draw_titles(
                canvas, &shaper, theme,
                l, t, r, opts.height,
                &self.x_axis, &self.y_axis,
                self.title.as_deref(),
            );
        }

        // Series in insertion order
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(
                    canvas, theme,
                    l, t, r, b,
                    &self.x_axis, &self.y_axis, s,
                ),
                SeriesType::Scatter => draw_scatter_series(
                    canvas, theme,
                    l, t, r, b,
                    &self.x_axis, &self.y_axis, s,
                ),
            }
        }

        if !opts.tight {
            return Ok(surface);
        }
        crop_to_content(surface, opts)
    }
}

// ---- helpers ----------------------------------------------------------------

fn read_rgba(surface: &mut skia::Surface) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
    let w = surface.width();
    let h = surface.height();
    let info = skia::ImageInfo::new(
        (w, h),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !surface.canvas().read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok((px, w, h, stride))
}

/// Re-draw the surface into a smaller one spanning the padded content box.
fn crop_to_content(mut surface: skia::Surface, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
    let (px, w, h, _stride) = read_rgba(&mut surface)?;
    let content = match content_bounds(&px, w, h, opts.theme.background) {
        Some(c) => c,
        None => return Ok(surface), // blank surface, nothing to trim
    };
    let full = RectI32::from_ltwh(0, 0, w, h);
    let rect = content.pad_within(opts.tight_pad, &full);
    if rect.is_empty() || (rect.width() == w && rect.height() == h) {
        return Ok(surface);
    }

    let image = surface.image_snapshot();
    let mut cropped = skia::surfaces::raster_n32_premul((rect.width(), rect.height()))
        .ok_or(RenderError::Surface)?;
    let canvas = cropped.canvas();
    canvas.clear(opts.theme.background);
    let dx = -(rect.left as f32);
    let dy = -(rect.top as f32);
    canvas.draw_image(&image, (dx, dy), None);
    Ok(cropped)
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);

    for &tx in x_ticks {
        let x = l as f32 + ((tx - x_axis.min) / xspan) as f32 * (r - l) as f32;
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
    }
    for &ty in y_ticks {
        let y = b as f32 - ((ty - y_axis.min) / yspan) as f32 * (b - t) as f32;
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, l: i32, t: i32, r: i32, b: i32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    draw_labels: bool,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let x_step = if x_ticks.len() >= 2 { x_ticks[1] - x_ticks[0] } else { xspan };
    let y_step = if y_ticks.len() >= 2 { y_ticks[1] - y_ticks[0] } else { yspan };

    for &tx in x_ticks {
        let x = l as f32 + ((tx - x_axis.min) / xspan) as f32 * (r - l) as f32;
        canvas.draw_line((x, b as f32), (x, b as f32 + TICK_LEN), &paint);
        if draw_labels {
            let size = x_axis.tick_font_size;
            shaper.draw(
                canvas,
                &format_tick(tx, x_step),
                x,
                b as f32 + TICK_LEN + 2.0 + size * 0.8,
                size,
                theme.tick_label,
                Anchor::Center,
            );
        }
    }
    for &ty in y_ticks {
        let y = b as f32 - ((ty - y_axis.min) / yspan) as f32 * (b - t) as f32;
        canvas.draw_line((l as f32 - TICK_LEN, y), (l as f32, y), &paint);
        if draw_labels {
            let size = y_axis.tick_font_size;
            shaper.draw(
                canvas,
                &format_tick(ty, y_step),
                l as f32 - TICK_LEN - 4.0,
                y + size * 0.35,
                size,
                theme.tick_label,
                Anchor::Right,
            );
        }
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    surface_height: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    title: Option<&str>,
) {
    if !x_axis.label.is_empty() {
        shaper.draw(
            canvas,
            &x_axis.label,
            (l + r) as f32 * 0.5,
            surface_height as f32 - 8.0,
            x_axis.label_font_size,
            theme.axis_label,
            Anchor::Center,
        );
    }
    if !y_axis.label.is_empty() {
        // Drawn horizontally above the plot, next to the y axis
        shaper.draw(
            canvas,
            &y_axis.label,
            6.0,
            t as f32 - 6.0,
            y_axis.label_font_size,
            theme.axis_label,
            Anchor::Left,
        );
    }
    if let Some(title) = title {
        if !title.is_empty() {
            shaper.draw(
                canvas,
                title,
                (l + r) as f32 * 0.5,
                t as f32 - 6.0,
                TITLE_FONT_SIZE,
                theme.axis_label,
                Anchor::Center,
            );
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Scale helpers
    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut path_builder = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    path_builder.move_to((sx(x0), sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path_builder.line_to((sx(x), sy(y)));
    }
    let path = path_builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(series.color.unwrap_or(theme.line_stroke));

    canvas.draw_path(&path, &stroke);
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    if series.data_xy.is_empty() {
        return;
    }

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(series.color.unwrap_or(theme.marker_fill));

    let radius = series.marker_radius_px();
    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx(x), sy(y)), radius, &fill);
    }
}
