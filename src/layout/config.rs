//! Configuration for the layout renderer

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvas size (width, height)
    pub canvas_size: (f64, f64),

    /// Margin reserved on every side of the shape
    pub padding: f64,

    /// Distance from the shape's bottom edge to the length label baseline
    pub length_label_margin: f64,

    /// Distance from the shape's right edge to the width label
    pub width_label_margin: f64,

    /// Distance from the shape's bottom edge to the horizontal guide
    pub length_guide_margin: f64,

    /// Distance from the shape's right edge to the vertical guide
    pub width_guide_margin: f64,

    /// Guide dash pattern (on, off)
    pub dash_pattern: (f64, f64),

    /// Number of decimals shown in labels
    pub label_precision: usize,

    /// Suffix appended to label values
    pub unit_suffix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: (400.0, 300.0),
            padding: 40.0,
            length_label_margin: 25.0,
            width_label_margin: 20.0,
            length_guide_margin: 15.0,
            width_guide_margin: 10.0,
            dash_pattern: (5.0, 5.0),
            label_precision: 2,
            unit_suffix: "units".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_size = (width, height);
        self
    }

    /// Set the padding around the shape
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the guide dash pattern
    pub fn with_dash_pattern(mut self, on: f64, off: f64) -> Self {
        self.dash_pattern = (on, off);
        self
    }

    /// Set the label unit suffix (empty for bare numbers)
    pub fn with_unit_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.unit_suffix = suffix.into();
        self
    }

    /// Space left for the shape once padding is removed (width, height)
    pub fn available_size(&self) -> (f64, f64) {
        let (width, height) = self.canvas_size;
        (width - 2.0 * self.padding, height - 2.0 * self.padding)
    }

    /// Format a dimension the way labels and summaries show it
    pub fn format_dimension(&self, value: f64) -> String {
        if self.unit_suffix.is_empty() {
            format!("{:.*}", self.label_precision, value)
        } else {
            format!("{:.*} {}", self.label_precision, value, self.unit_suffix)
        }
    }
}
