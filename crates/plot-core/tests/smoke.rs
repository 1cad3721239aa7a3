// File: crates/plot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{Chart, RenderOptions, Axis, Series, SeriesType};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series plus a scatter overlay
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    chart.add_series(Series::with_data(
        SeriesType::Scatter,
        vec![(0.5, 1.0), (2.5, 3.0), (3.5, 1.5)],
    ));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_to_invalid_path_fails() {
    // Parent of the output path is a file, so directory creation must fail
    // and no output may appear.
    let blocker = std::path::PathBuf::from("target/test_out/not_a_dir");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"blocker").unwrap();

    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 1.0)]));
    let out = blocker.join("blocked.png");
    let res = chart.render_to_png(&RenderOptions::default(), &out);
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn from_columns_rejects_mismatched_lengths() {
    let err = Series::from_columns(SeriesType::Line, &[0.0, 1.0, 2.0], &[0.0, 1.0]);
    assert!(err.is_err());
}
