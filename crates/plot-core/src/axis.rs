// File: crates/plot-core/src/axis.rs
// Summary: Axis model with label, range, and font sizes.

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub label_font_size: f32,
    pub tick_font_size: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            label_font_size: 14.0,
            tick_font_size: 12.0,
        }
    }

    pub fn with_tick_font_size(mut self, size: f32) -> Self {
        self.tick_font_size = size;
        self
    }

    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    /// An unlabeled unit-range X axis; ranges are usually set by autoscale.
    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    /// An unlabeled unit-range Y axis; ranges are usually set by autoscale.
    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
