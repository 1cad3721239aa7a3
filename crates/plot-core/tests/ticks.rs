// File: crates/plot-core/tests/ticks.rs
// Purpose: Validate tick placement and label formatting.

use plot_core::ticks::{format_tick, linspace, nice_step, nice_ticks};

#[test]
fn linspace_covers_endpoints() {
    let v = linspace(0.0, 10.0, 5);
    assert_eq!(v.len(), 5);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[4], 10.0);
}

#[test]
fn nice_step_rounds_to_1_2_5() {
    assert!((nice_step(0.017) - 0.02).abs() < 1e-12);
    assert_eq!(nice_step(1.6), 2.0);
    assert_eq!(nice_step(3.0), 5.0);
    assert_eq!(nice_step(7.0), 10.0);
    assert!((nice_step(100.0) - 100.0).abs() < 1e-9);
}

#[test]
fn nice_ticks_stay_in_range() {
    let ticks = nice_ticks(89.5, 100.5, 8);
    assert!(!ticks.is_empty());
    for &v in &ticks {
        assert!(v >= 89.5 && v <= 100.5);
    }
    // the similarity range lands on even integers
    assert_eq!(ticks, vec![90.0, 92.0, 94.0, 96.0, 98.0, 100.0]);
}

#[test]
fn nice_ticks_on_small_spans() {
    let ticks = nice_ticks(0.4813, 0.5987, 8);
    assert_eq!(ticks.len(), 5);
    assert!((ticks[0] - 0.50).abs() < 1e-9);
    assert!((ticks[4] - 0.58).abs() < 1e-9);
}

#[test]
fn nice_ticks_degenerate_range() {
    assert_eq!(nice_ticks(1.0, 1.0, 6), vec![1.0]);
    assert_eq!(nice_ticks(2.0, 1.0, 6), vec![2.0]);
}

#[test]
fn format_tick_uses_step_precision() {
    assert_eq!(format_tick(90.0, 2.0), "90");
    assert_eq!(format_tick(0.52, 0.02), "0.52");
    assert_eq!(format_tick(0.6000000000000001, 0.2), "0.6");
    assert_eq!(format_tick(-1.0e-12, 0.5), "0.0");
}
