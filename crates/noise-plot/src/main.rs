// File: crates/noise-plot/src/main.rs
// Summary: Renders cosine similarity of noised embeddings vs. accuracy to noise_image.png.

use anyhow::{Context, Result};
use plot_core::{Chart, Color, RenderOptions, Series, SeriesType};

const OUTPUT_FILE: &str = "noise_image.png";
const TICK_FONT_SIZE: f32 = 20.0;
const MARKER_SIZE: f64 = 120.0;
/// Fraction of the data span left free on each side of the plot.
const AXIS_MARGIN: f64 = 0.05;

fn main() -> Result<()> {
    env_logger::init();

    let chart = build_chart()?;
    let opts = render_options();
    chart
        .render_to_png(&opts, OUTPUT_FILE)
        .with_context(|| format!("writing {OUTPUT_FILE}"))?;
    log::info!("wrote {OUTPUT_FILE}");
    Ok(())
}

/// Flat accuracy baseline at 0.5 across the sampled similarity range.
fn baseline_columns() -> (Vec<f64>, Vec<f64>) {
    let x = vec![99.0, 98.0, 97.0, 96.0, 95.0, 94.0, 93.0, 92.0, 91.0, 90.0];
    let y = vec![0.5; 10];
    (x, y)
}

/// Measured (cosine similarity, accuracy) pairs.
fn sample_columns() -> (Vec<f64>, Vec<f64>) {
    let x = vec![100.0, 98.5, 95.0, 90.0];
    let y = vec![
        0.5933333333333334,
        0.5933333333333334,
        0.5466666666666666,
        0.4866666666666667,
    ];
    (x, y)
}

fn build_chart() -> Result<Chart> {
    let (bx, by) = baseline_columns();
    let baseline = Series::from_columns(SeriesType::Line, &bx, &by)
        .map_err(anyhow::Error::msg)?
        .with_color(Color::RED);

    let (sx, sy) = sample_columns();
    let samples = Series::from_columns(SeriesType::Scatter, &sx, &sy)
        .map_err(anyhow::Error::msg)?
        .with_marker_size(MARKER_SIZE);

    let mut chart = Chart::new();
    chart.add_series(baseline);
    chart.add_series(samples);
    chart.autoscale_axes(AXIS_MARGIN);

    // Axis labels and the title stay unset; only tick labels are drawn.
    chart.x_axis.tick_font_size = TICK_FONT_SIZE;
    chart.y_axis.tick_font_size = TICK_FONT_SIZE;
    Ok(chart)
}

fn render_options() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.tight = true;
    opts
}
