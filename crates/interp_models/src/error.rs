//! Fit error types.

use interp_core::types::{InterpolationError, SolverError};
use thiserror::Error;

/// Failure to construct a parametric fit.
///
/// Fits either construct with finite parameters from a converged solve or
/// fail with one of these variants; there is no partially fitted state.
///
/// # Examples
/// ```
/// use interp_models::FitError;
///
/// let err = FitError::NotConverged { iterations: 200, residual_ss: 0.5 };
/// assert!(err.to_string().contains("200"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitError {
    /// Sample data rejected before fitting.
    #[error("Invalid fit data: {0}")]
    Domain(#[from] InterpolationError),

    /// The least-squares solver failed outright.
    #[error("Solver failure: {0}")]
    Solver(#[from] SolverError),

    /// The solver ran out of iterations.
    #[error("Fit did not converge (iterations: {iterations}, residual: {residual_ss:.6e})")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// Final residual sum of squares
        residual_ss: f64,
    },

    /// The solver converged to NaN or infinite parameters.
    #[error("Fit produced non-finite parameters: {params:?}")]
    NonFiniteParameters {
        /// The offending parameter vector
        params: Vec<f64>,
    },
}

impl FitError {
    /// Returns true for failures caused by the input data rather than the solve.
    pub fn is_data_error(&self) -> bool {
        matches!(self, FitError::Domain(_))
    }
}
