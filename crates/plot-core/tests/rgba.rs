// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use plot_core::theme;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is background: opaque white for the light theme (RGBA)
    assert_eq!(px[0..4], [255, 255, 255, 255]);
}

#[test]
fn dark_theme_fills_background() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(0.5, 0.5)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = theme::find("dark");
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px[0..4], [18, 18, 20, 255]);
}

#[test]
fn grid_draws_inside_plot_area() {
    // With the grid on, some pixel strictly inside the plot area differs
    // from the background even though no series is present.
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.draw_grid = true;
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");

    let mut found_ink = false;
    // Scan a horizontal band through the middle of the surface.
    let row = (h / 2) as usize;
    for col in (opts.insets.left as usize + 2)..(w as usize - opts.insets.right as usize - 2) {
        let i = (row * w as usize + col) * 4;
        if px[i..i + 3] != [255, 255, 255] {
            found_ink = true;
            break;
        }
    }
    assert!(found_ink, "grid lines should leave ink inside the plot area");
}
