//! Nonlinear least-squares solving for parametric curve fits.
//!
//! ## Available Solvers
//!
//! - [`LevenbergMarquardtSolver`]: damped Gauss-Newton with finite-difference
//!   Jacobian and a covariance estimate at the solution
//!
//! ## Configuration
//!
//! [`LMConfig`] controls:
//! - `tolerance`: Residual convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 200)
//! - damping schedule (`initial_lambda`, `lambda_up`, `lambda_down`, bounds)
//!
//! ## Example
//!
//! ```
//! use interp_core::math::solvers::LevenbergMarquardtSolver;
//!
//! // Minimize (p[0] - 2)² + (p[1] - 3)²
//! let residuals = |params: &[f64]| -> Vec<f64> {
//!     vec![params[0] - 2.0, params[1] - 3.0]
//! };
//!
//! let solver = LevenbergMarquardtSolver::default();
//! let result = solver.solve(residuals, vec![0.0, 0.0]).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.params[0] - 2.0).abs() < 1e-6);
//! ```

mod levenberg_marquardt;

pub use levenberg_marquardt::{LMConfig, LMResult, LevenbergMarquardtSolver};
