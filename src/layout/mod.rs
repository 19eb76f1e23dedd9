//! Layout renderer for placing a solved rectangle on a canvas
//!
//! This module scales a [`Rectangle`] uniformly into the canvas area left
//! after padding, centers it, and derives the dimension labels and dashed
//! guide lines around it. Nothing is drawn here; the result is a
//! [`RectangleLayout`] that a renderer turns into output.

pub mod config;
pub mod error;
pub mod types;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use types::*;

use crate::solver::Rectangle;

/// Scale and center a rectangle inside `canvas_width x canvas_height`
///
/// The caller guarantees the canvas is larger than twice the padding on both
/// axes; [`compute`] checks this before calling.
pub fn compute_geometry(
    rect: &Rectangle,
    canvas_width: f64,
    canvas_height: f64,
    padding: f64,
) -> ScaledGeometry {
    let available_width = canvas_width - 2.0 * padding;
    let available_height = canvas_height - 2.0 * padding;

    let scale_x = available_width / rect.width;
    let scale_y = available_height / rect.height;
    let scale = scale_x.min(scale_y);

    let draw_width = rect.width * scale;
    let draw_height = rect.height * scale;

    ScaledGeometry {
        origin_x: (canvas_width - draw_width) / 2.0,
        origin_y: (canvas_height - draw_height) / 2.0,
        draw_width,
        draw_height,
        scale,
    }
}

/// Compute the full drawing layout for a rectangle
///
/// # Example
///
/// ```rust
/// use rectangle_calculator::{layout, solve, LayoutConfig};
///
/// let rect = solve(20.0, 16.0).unwrap();
/// let result = layout::compute(&rect, &LayoutConfig::default()).unwrap();
/// assert_eq!(result.length_label.text, "8.00 units");
/// assert_eq!(result.width_label.rotation, -90.0);
/// ```
pub fn compute(rect: &Rectangle, config: &LayoutConfig) -> Result<RectangleLayout, LayoutError> {
    validate_canvas(config)?;
    validate_rectangle(rect)?;

    let (canvas_width, canvas_height) = config.canvas_size;
    let geometry = compute_geometry(rect, canvas_width, canvas_height, config.padding);

    let shape = geometry.bounds();

    Ok(RectangleLayout {
        canvas: BoundingBox::new(0.0, 0.0, canvas_width, canvas_height),
        geometry,
        shape,
        length_label: length_label(rect, &shape, config),
        width_label: width_label(rect, &shape, config),
        length_guide: length_guide(&shape, config),
        width_guide: width_guide(&shape, config),
    })
}

fn validate_canvas(config: &LayoutConfig) -> Result<(), LayoutError> {
    let (width, height) = config.canvas_size;
    if !width.is_finite() || !height.is_finite() || !config.padding.is_finite() {
        return Err(LayoutError::invalid_canvas(
            config.canvas_size,
            config.padding,
            "dimensions must be finite",
        ));
    }
    if config.padding < 0.0 {
        return Err(LayoutError::invalid_canvas(
            config.canvas_size,
            config.padding,
            "padding must not be negative",
        ));
    }
    let (available_width, available_height) = config.available_size();
    if available_width <= 0.0 || available_height <= 0.0 {
        return Err(LayoutError::invalid_canvas(
            config.canvas_size,
            config.padding,
            "padding leaves no room for the shape",
        ));
    }
    Ok(())
}

fn validate_rectangle(rect: &Rectangle) -> Result<(), LayoutError> {
    if !rect.width.is_finite() || !rect.height.is_finite() || rect.height <= 0.0 {
        return Err(LayoutError::invalid_rectangle(
            rect.width,
            rect.height,
            "sides must be finite and positive",
        ));
    }
    if rect.width < rect.height {
        return Err(LayoutError::invalid_rectangle(
            rect.width,
            rect.height,
            "width must be the longer side",
        ));
    }
    Ok(())
}

/// Centered below the bottom edge
fn length_label(rect: &Rectangle, shape: &BoundingBox, config: &LayoutConfig) -> DimensionLabel {
    DimensionLabel {
        text: config.format_dimension(rect.width),
        position: Point::new(shape.center().x, shape.bottom() + config.length_label_margin),
        rotation: 0.0,
    }
}

/// Right of the right edge, reading bottom-to-top
fn width_label(rect: &Rectangle, shape: &BoundingBox, config: &LayoutConfig) -> DimensionLabel {
    DimensionLabel {
        text: config.format_dimension(rect.height),
        position: Point::new(shape.right() + config.width_label_margin, shape.center().y),
        rotation: -90.0,
    }
}

fn length_guide(shape: &BoundingBox, config: &LayoutConfig) -> GuideLine {
    let y = shape.bottom() + config.length_guide_margin;
    GuideLine {
        start: Point::new(shape.x, y),
        end: Point::new(shape.right(), y),
        dash: config.dash_pattern,
    }
}

fn width_guide(shape: &BoundingBox, config: &LayoutConfig) -> GuideLine {
    let x = shape.right() + config.width_guide_margin;
    GuideLine {
        start: Point::new(x, shape.y),
        end: Point::new(x, shape.bottom()),
        dash: config.dash_pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rect(width: f64, height: f64) -> Rectangle {
        Rectangle { width, height }
    }

    #[test]
    fn test_geometry_width_bound() {
        // 320x220 available; width limits the scale to 40
        let geometry = compute_geometry(&rect(8.0, 2.0), 400.0, 300.0, 40.0);
        assert_eq!(
            geometry,
            ScaledGeometry {
                origin_x: 40.0,
                origin_y: 110.0,
                draw_width: 320.0,
                draw_height: 80.0,
                scale: 40.0,
            }
        );
    }

    #[test]
    fn test_geometry_height_bound() {
        // Square: height limits the scale to 55
        let geometry = compute_geometry(&rect(4.0, 4.0), 400.0, 300.0, 40.0);
        assert_eq!(geometry.scale, 55.0);
        assert_eq!(geometry.draw_width, 220.0);
        assert_eq!(geometry.draw_height, 220.0);
        assert_eq!(geometry.origin_x, 90.0);
        assert_eq!(geometry.origin_y, 40.0);
    }

    #[test]
    fn test_geometry_scales_up_small_shapes() {
        let geometry = compute_geometry(&rect(0.5, 0.25), 400.0, 300.0, 40.0);
        assert_eq!(geometry.scale, 640.0);
        assert_eq!(geometry.draw_width, 320.0);
        assert_eq!(geometry.draw_height, 160.0);
    }

    #[test]
    fn test_compute_labels() {
        let result = compute(&rect(8.0, 2.0), &LayoutConfig::default()).unwrap();

        assert_eq!(
            result.length_label,
            DimensionLabel {
                text: "8.00 units".to_string(),
                position: Point::new(200.0, 215.0),
                rotation: 0.0,
            }
        );
        assert_eq!(
            result.width_label,
            DimensionLabel {
                text: "2.00 units".to_string(),
                position: Point::new(380.0, 150.0),
                rotation: -90.0,
            }
        );
    }

    #[test]
    fn test_compute_guides() {
        let result = compute(&rect(8.0, 2.0), &LayoutConfig::default()).unwrap();

        assert_eq!(result.length_guide.start, Point::new(40.0, 205.0));
        assert_eq!(result.length_guide.end, Point::new(360.0, 205.0));
        assert_eq!(result.width_guide.start, Point::new(370.0, 110.0));
        assert_eq!(result.width_guide.end, Point::new(370.0, 190.0));
        assert_eq!(result.length_guide.dash, (5.0, 5.0));
        assert_eq!(result.width_guide.dash, (5.0, 5.0));
    }

    #[test]
    fn test_compute_shape_inside_padding() {
        let config = LayoutConfig::default();
        let result = compute(&rect(8.0, 2.0), &config).unwrap();
        let inner = BoundingBox::new(40.0, 40.0, 320.0, 220.0);
        assert!(inner.contains_box(&result.shape));
        assert_eq!(result.canvas, BoundingBox::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_compute_rejects_tiny_canvas() {
        let config = LayoutConfig::new().with_canvas_size(80.0, 300.0);
        let err = compute(&rect(8.0, 2.0), &config).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_compute_rejects_non_finite_canvas() {
        let config = LayoutConfig::new().with_canvas_size(f64::INFINITY, 300.0);
        assert!(compute(&rect(8.0, 2.0), &config).is_err());

        let config = LayoutConfig::new().with_padding(-1.0);
        assert!(compute(&rect(8.0, 2.0), &config).is_err());
    }

    #[test]
    fn test_compute_rejects_unordered_rectangle() {
        let err = compute(&rect(2.0, 8.0), &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRectangle { .. }));

        let err = compute(&rect(1.0, 0.0), &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRectangle { .. }));
    }
}
