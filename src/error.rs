//! Error types for input validation and dimension solving

use std::fmt;

use thiserror::Error;

/// The category of a solver failure, in the order the checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// One or both inputs are not finite numbers
    InvalidNumber,
    /// One or both inputs are zero or negative
    NonPositive,
    /// No real rectangle has both the given perimeter and area
    NoRealSolution,
    /// A rectangle exists but a side is too small or large for `f64`
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidNumber => "invalid-number",
            ErrorKind::NonPositive => "non-positive",
            ErrorKind::NoRealSolution => "no-real-solution",
            ErrorKind::OutOfRange => "out-of-range",
        };
        f.write_str(name)
    }
}

/// Errors returned by the dimension solver
///
/// The display text is meant to be shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Please enter valid numbers for both perimeter and area.")]
    InvalidNumber { perimeter: f64, area: f64 },

    #[error("Perimeter and area must be positive numbers.")]
    NonPositive { perimeter: f64, area: f64 },

    #[error(
        "No valid rectangle exists with these perimeter and area values. \
         The area is too large for the given perimeter."
    )]
    NoRealSolution {
        perimeter: f64,
        area: f64,
        discriminant: f64,
    },

    #[error(
        "The rectangle is too thin to compute with these values. \
         Try a larger area or a smaller perimeter."
    )]
    OutOfRange { perimeter: f64, area: f64 },
}

impl SolveError {
    /// Create an invalid number error
    pub fn invalid_number(perimeter: f64, area: f64) -> Self {
        Self::InvalidNumber { perimeter, area }
    }

    /// Create a non-positive input error
    pub fn non_positive(perimeter: f64, area: f64) -> Self {
        Self::NonPositive { perimeter, area }
    }

    /// Create a no-real-solution error carrying the offending discriminant
    pub fn no_real_solution(perimeter: f64, area: f64, discriminant: f64) -> Self {
        Self::NoRealSolution {
            perimeter,
            area,
            discriminant,
        }
    }

    /// Create an error for sides that cannot be represented
    pub fn out_of_range(perimeter: f64, area: f64) -> Self {
        Self::OutOfRange { perimeter, area }
    }

    /// Get the error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::NonPositive { .. } => ErrorKind::NonPositive,
            Self::NoRealSolution { .. } => ErrorKind::NoRealSolution,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// The user-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_invalid_number_message() {
        let err = SolveError::invalid_number(f64::NAN, 10.0);
        assert_snapshot!(err.message(), @"Please enter valid numbers for both perimeter and area.");
    }

    #[test]
    fn test_non_positive_message() {
        let err = SolveError::non_positive(-5.0, 10.0);
        assert_snapshot!(err.message(), @"Perimeter and area must be positive numbers.");
    }

    #[test]
    fn test_no_real_solution_message() {
        let err = SolveError::no_real_solution(10.0, 100.0, -375.0);
        assert_snapshot!(err.message(), @"No valid rectangle exists with these perimeter and area values. The area is too large for the given perimeter.");
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            SolveError::invalid_number(0.0, 0.0).kind(),
            ErrorKind::InvalidNumber
        );
        assert_eq!(
            SolveError::non_positive(0.0, 0.0).kind(),
            ErrorKind::NonPositive
        );
        assert_eq!(
            SolveError::no_real_solution(1.0, 1.0, -3.75).kind(),
            ErrorKind::NoRealSolution
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SolveError::out_of_range(1e300, 1e-300);
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_snapshot!(err.message(), @"The rectangle is too thin to compute with these values. Try a larger area or a smaller perimeter.");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::NoRealSolution.to_string(), "no-real-solution");
    }
}
