//! Rectangle Calculator - recover a rectangle from its perimeter and area
//!
//! This library provides the dimension solver, a layout renderer that places
//! the solved rectangle on a fixed-size canvas with labeled dimensions, and an
//! SVG renderer for the result.
//!
//! # Example
//!
//! ```rust
//! use rectangle_calculator::render;
//!
//! let svg = render(20.0, 16.0).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("8.00 units"));
//! ```

pub mod error;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod solver;
pub mod stylesheet;

pub use error::{ErrorKind, SolveError};
pub use input::parse_number;
pub use layout::{LayoutConfig, LayoutError, RectangleLayout, ScaledGeometry};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use solver::{solve, solve_with_config, Measurement, Rectangle, SolveResult, SolverConfig};

use log::debug;
use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Inputs rejected or unsolvable
    #[error("{0}")]
    Solve(#[from] SolveError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl RenderError {
    /// The text to show the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The solver error kind, if the failure came from the inputs
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RenderError::Solve(e) => Some(e.kind()),
            RenderError::Layout(_) => None,
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Solver configuration
    pub solver: SolverConfig,
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: log the computed geometry
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the solver configuration
    pub fn with_solver(mut self, config: SolverConfig) -> Self {
        self.solver = config;
        self
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// One completed calculation: the inputs, the solved sides, and where to draw them
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub measurement: Measurement,
    pub rectangle: Rectangle,
    pub layout: RectangleLayout,
}

impl Calculation {
    /// Both dimensions as display text, longer side first
    pub fn summary(&self) -> String {
        format!(
            "Length: {}\nWidth: {}",
            self.layout.length_label.text, self.layout.width_label.text
        )
    }

    /// Render this calculation to SVG
    pub fn to_svg(&self, config: &RenderConfig) -> String {
        render_svg_with_stylesheet(&self.layout, &config.svg, &config.stylesheet)
    }
}

/// Parse raw field text, solve, and lay out the result
///
/// # Example
///
/// ```rust
/// use rectangle_calculator::{calculate, ErrorKind, RenderConfig};
///
/// let calc = calculate("20", "18.75", &RenderConfig::default()).unwrap();
/// assert_eq!(calc.summary(), "Length: 7.50 units\nWidth: 2.50 units");
///
/// let err = calculate("10", "100", &RenderConfig::default()).unwrap_err();
/// assert_eq!(err.kind(), Some(ErrorKind::NoRealSolution));
/// ```
pub fn calculate(
    perimeter: &str,
    area: &str,
    config: &RenderConfig,
) -> Result<Calculation, RenderError> {
    calculate_measurement(Measurement::parse(perimeter, area), config)
}

/// Solve and lay out an already parsed measurement
pub fn calculate_measurement(
    measurement: Measurement,
    config: &RenderConfig,
) -> Result<Calculation, RenderError> {
    let rectangle = measurement.solve(&config.solver)?;
    let layout = layout::compute(&rectangle, &config.layout)?;

    // Placement only, the solver logs the sides
    if config.debug {
        let g = &layout.geometry;
        debug!(
            "scale={} origin=({}, {}) drawn={}x{}",
            g.scale, g.origin_x, g.origin_y, g.draw_width, g.draw_height
        );
    }

    Ok(Calculation {
        measurement,
        rectangle,
        layout,
    })
}

/// Render a perimeter/area pair to SVG with default configuration
pub fn render(perimeter: f64, area: f64) -> Result<String, RenderError> {
    render_with_config(perimeter, area, &RenderConfig::default())
}

/// Render a perimeter/area pair to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use rectangle_calculator::{render_with_config, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_canvas_size(600.0, 400.0))
///     .with_svg(SvgConfig::default().with_standalone(false));
///
/// let svg = render_with_config(16.0, 16.0, &config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_with_config(
    perimeter: f64,
    area: f64,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let calc = calculate_measurement(Measurement::new(perimeter, area), config)?;
    Ok(calc.to_svg(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_simple() {
        let svg = render(20.0, 16.0).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("8.00 units"));
        assert!(svg.contains("2.00 units"));
    }

    #[test]
    fn test_render_square() {
        let svg = render(16.0, 16.0).unwrap();
        assert_eq!(svg.matches("4.00 units").count(), 2);
    }

    #[test]
    fn test_render_error_message_is_verbatim() {
        let err = render(-5.0, 10.0).unwrap_err();
        assert_eq!(err.message(), "Perimeter and area must be positive numbers.");
        assert_eq!(err.kind(), Some(ErrorKind::NonPositive));
    }

    #[test]
    fn test_calculate_from_text() {
        let calc = calculate(" 12 ", "6.75", &RenderConfig::default()).unwrap();
        assert_eq!(calc.measurement, Measurement::new(12.0, 6.75));
        assert_eq!(calc.rectangle, Rectangle { width: 4.5, height: 1.5 });
        assert_eq!(calc.summary(), "Length: 4.50 units\nWidth: 1.50 units");
    }

    #[test]
    fn test_calculate_empty_field() {
        let err = calculate("", "10", &RenderConfig::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidNumber));
        assert_eq!(
            err.message(),
            "Please enter valid numbers for both perimeter and area."
        );
    }

    #[test]
    fn test_calculate_layout_error() {
        let config =
            RenderConfig::new().with_layout(LayoutConfig::new().with_canvas_size(50.0, 50.0));
        let err = calculate("20", "16", &config).unwrap_err();
        assert!(matches!(err, RenderError::Layout(_)));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_calculate_with_epsilon() {
        let config = RenderConfig::new().with_solver(SolverConfig::new().with_epsilon(1e-4));
        let calc = calculate("16", "16.001", &config).unwrap();
        assert!(calc.rectangle.is_square());
    }

    #[test]
    fn test_debug_mode_still_renders() {
        let config = RenderConfig::new().with_debug(true);
        assert!(render_with_config(20.0, 16.0, &config).is_ok());
    }
}
