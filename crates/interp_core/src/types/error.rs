//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from domain validation, slope estimation and evaluation
//! - `SolverError`: Errors from the least-squares solver

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside the domain of an interpolator that refuses to extrapolate
/// - `InsufficientData`: Not enough data points for interpolation
/// - `UnsortedAbscissae`: Sample abscissae are not in ascending order
/// - `DuplicateAbscissa`: Sample abscissae contain a repeated value
/// - `InvalidInput`: General invalid input error
/// - `UnknownBound`: Bound selector other than `"min"` or `"max"`
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::UnsortedAbscissae { index: 3 };
/// assert!(format!("{}", err).contains("sorted order"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not in ascending order.
    #[error("x values are not in sorted order at index {index}")]
    UnsortedAbscissae {
        /// Index of the first value smaller than its predecessor
        index: usize,
    },

    /// Abscissae contain a repeated value.
    #[error("x values are not strictly increasing: x[{index}] = {x} repeats its predecessor")]
    DuplicateAbscissa {
        /// Index of the repeated value
        index: usize,
        /// The repeated abscissa
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unrecognised bound selector.
    #[error("Unknown bound selector '{0}': expected 'min' or 'max'")]
    UnknownBound(String),
}

/// Least-squares solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NumericalInstability`: Empty problem, non-finite residuals or similar
///
/// # Examples
/// ```
/// use interp_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
