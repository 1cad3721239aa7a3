// File: crates/plot-core/src/series.rs
// Summary: Series model for line and scatter data with per-series styling.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
}

/// Default scatter marker size, in area-style units (diameter = sqrt(size)).
pub const DEFAULT_MARKER_SIZE: f64 = 36.0;
/// Default line stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Overrides the theme stroke/fill color when set.
    pub color: Option<skia::Color>,
    /// Marker size in area-style units; used by Scatter only.
    pub marker_size: f64,
    /// Stroke width in pixels; used by Line only.
    pub stroke_width: f32,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            data_xy: Vec::new(),
            color: None,
            marker_size: DEFAULT_MARKER_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(series_type);
        s.data_xy = data;
        s
    }

    /// Build a series from separate x/y columns, enforcing equal lengths.
    pub fn from_columns(series_type: SeriesType, xs: &[f64], ys: &[f64]) -> Result<Self, &'static str> {
        if xs.len() != ys.len() {
            return Err("x and y column lengths differ");
        }
        Ok(Self::with_data(
            series_type,
            xs.iter().copied().zip(ys.iter().copied()).collect(),
        ))
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Rendered marker radius in pixels for Scatter series.
    pub fn marker_radius_px(&self) -> f32 {
        (self.marker_size.max(0.0).sqrt() * 0.5) as f32
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
