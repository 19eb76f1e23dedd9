//! Configuration for the dimension solver

use log::warn;

/// Configuration options for solving
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Relative tolerance for a negative discriminant.
    ///
    /// A discriminant in `[-epsilon * half_perimeter², 0)` is treated as zero,
    /// producing a square instead of a no-solution error. Zero means exact.
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { epsilon: 0.0 }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the discriminant tolerance
    ///
    /// Negative or non-finite values fall back to exact comparison.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        if epsilon.is_finite() && epsilon >= 0.0 {
            self.epsilon = epsilon;
        } else {
            warn!("ignoring invalid solver epsilon {}, using 0", epsilon);
            self.epsilon = 0.0;
        }
        self
    }
}
