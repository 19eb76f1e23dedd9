//! Dimension solver
//!
//! Recovers a rectangle's sides from its perimeter `P` and area `A`. With
//! `P = 2(w + h)` and `A = w·h`, substituting `h = P/2 - w` gives
//! `w² - (P/2)·w + A = 0`, whose two roots are the two sides.

pub mod config;
pub mod types;

pub use config::SolverConfig;
pub use types::{Measurement, Rectangle, SolveResult};

use log::{debug, trace};

use crate::error::SolveError;

/// Solve for the sides with default configuration
///
/// # Example
///
/// ```rust
/// use rectangle_calculator::solve;
///
/// let rect = solve(20.0, 16.0).unwrap();
/// assert_eq!(rect.width, 8.0);
/// assert_eq!(rect.height, 2.0);
/// ```
pub fn solve(perimeter: f64, area: f64) -> SolveResult {
    solve_with_config(perimeter, area, &SolverConfig::default())
}

/// Solve for the sides with a custom discriminant tolerance
///
/// Inputs are validated before any arithmetic: non-finite values fail with
/// `InvalidNumber`, then zero or negative values fail with `NonPositive`.
pub fn solve_with_config(perimeter: f64, area: f64, config: &SolverConfig) -> SolveResult {
    if !perimeter.is_finite() || !area.is_finite() {
        debug!("rejecting non-finite input: P={} A={}", perimeter, area);
        return Err(SolveError::invalid_number(perimeter, area));
    }
    if perimeter <= 0.0 || area <= 0.0 {
        debug!("rejecting non-positive input: P={} A={}", perimeter, area);
        return Err(SolveError::non_positive(perimeter, area));
    }

    let half = perimeter / 2.0;
    let (scaled, discriminant, root) = discriminant_root(half, area);
    trace!(
        "P={} A={} half={} discriminant={} scaled={}",
        perimeter, area, half, discriminant, scaled
    );

    if scaled < 0.0 && scaled < -config.epsilon {
        debug!("no real solution: discriminant {}", discriminant);
        return Err(SolveError::no_real_solution(perimeter, area, discriminant));
    }

    // Within tolerance of zero counts as a square
    if scaled <= 0.0 {
        let side = half / 2.0;
        debug!("solved P={} A={} -> square of side {}", perimeter, area, side);
        return Ok(Rectangle::from_sides(side, side));
    }

    // Larger root directly, smaller one from the product of the roots so it
    // does not cancel to zero when 4A is tiny next to half²
    let longer = half / 2.0 + root / 2.0;
    let shorter = area / longer;
    if !longer.is_finite() || !(shorter > 0.0) {
        debug!("sides out of range: {} x {}", longer, shorter);
        return Err(SolveError::out_of_range(perimeter, area));
    }

    let rect = Rectangle::from_sides(longer, shorter);
    debug!("solved P={} A={} -> {} x {}", perimeter, area, rect.width, rect.height);
    Ok(rect)
}

/// Discriminant relative to half², the discriminant itself, and its square root
///
/// `half² - 4A` is used directly while it is finite. For perimeters where
/// `half²` overflows, the discriminant is computed as `half²·(1 - 4A/half²)`.
fn discriminant_root(half: f64, area: f64) -> (f64, f64, f64) {
    let direct = half * half - 4.0 * area;
    if direct.is_finite() {
        return (direct / (half * half), direct, direct.max(0.0).sqrt());
    }
    let scaled = 1.0 - 4.0 * (area / half) / half;
    (scaled, half * (half * scaled), half * scaled.max(0.0).sqrt())
}

/// `(P/2)² - 4A`; negative means no rectangle has both measures
pub fn discriminant(perimeter: f64, area: f64) -> f64 {
    let half = perimeter / 2.0;
    half * half - 4.0 * area
}
