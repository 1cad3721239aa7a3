// File: crates/plot-core/src/ticks.rs
// Summary: Tick layout helpers (even subdivision, 1/2/5 nice ticks, label formatting).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` up to the nearest 1/2/5 multiple of a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.abs().max(f64::MIN_POSITIVE).log10().floor());
    let norm = raw / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * mag
}

/// Tick positions covering [min, max] on a 1/2/5 grid, clipped to the range.
/// Aims for roughly `target` ticks; degenerate ranges yield a single tick.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let target = target.max(2);
    let step = nice_step((max - min) / (target as f64 - 1.0));
    let eps = step * 1e-6;

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let mut out = Vec::with_capacity((last - first + 1).max(0) as usize);
    for k in first..=last {
        let v = k as f64 * step;
        if v >= min - eps && v <= max + eps {
            out.push(if v.abs() < eps { 0.0 } else { v });
        }
    }
    if out.is_empty() { out.push(min); }
    out
}

/// Format a tick value with the number of decimals implied by `step`.
/// 1/2/5 steps keep this exact: 0.02 -> two decimals, 2.0 -> none.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let v = if value.abs() < step.abs() * 1e-6 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
