//! Error types for the layout renderer

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Canvas too small for its padding, or not a finite size
    #[error("invalid canvas {width}x{height} with padding {padding}: {reason}")]
    InvalidCanvas {
        width: f64,
        height: f64,
        padding: f64,
        reason: String,
    },

    /// Rectangle that breaks the `width >= height > 0` invariant
    #[error("cannot lay out rectangle {width}x{height}: {reason}")]
    InvalidRectangle {
        width: f64,
        height: f64,
        reason: String,
    },
}

impl LayoutError {
    /// Create an invalid canvas error
    pub fn invalid_canvas(
        (width, height): (f64, f64),
        padding: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidCanvas {
            width,
            height,
            padding,
            reason: reason.into(),
        }
    }

    /// Create an invalid rectangle error
    pub fn invalid_rectangle(width: f64, height: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRectangle {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_canvas_display() {
        let err = LayoutError::invalid_canvas((60.0, 300.0), 40.0, "no room left");
        assert_eq!(
            err.to_string(),
            "invalid canvas 60x300 with padding 40: no room left"
        );
    }

    #[test]
    fn test_invalid_rectangle_display() {
        let err = LayoutError::invalid_rectangle(0.0, 0.0, "sides must be positive");
        assert!(err.to_string().contains("sides must be positive"));
    }
}
