//! Value types for the dimension solver

use crate::error::SolveError;
use crate::input::parse_number;

use super::{solve_with_config, SolverConfig};

/// Result of one solve call
pub type SolveResult = Result<Rectangle, SolveError>;

/// A perimeter/area pair as entered by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub perimeter: f64,
    pub area: f64,
}

impl Measurement {
    pub fn new(perimeter: f64, area: f64) -> Self {
        Self { perimeter, area }
    }

    /// Build a measurement from raw field text; unparseable fields become `NaN`
    pub fn parse(perimeter: &str, area: &str) -> Self {
        Self::new(parse_number(perimeter), parse_number(area))
    }

    /// Solve this measurement for the rectangle's sides
    pub fn solve(&self, config: &SolverConfig) -> SolveResult {
        solve_with_config(self.perimeter, self.area, config)
    }
}

/// A rectangle with its longer side first
///
/// Invariant: `width >= height > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// The longer (or equal) side
    pub width: f64,
    /// The shorter (or equal) side
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from two sides in any order
    pub fn from_sides(a: f64, b: f64) -> Self {
        Self {
            width: a.max(b),
            height: a.min(b),
        }
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Ratio of the longer side to the shorter one, always >= 1
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
