//! Numerical building blocks.
//!
//! - [`interpolators`]: domain validation, slope estimation, Hermite evaluation
//!   and the stateful 1D interpolators
//! - [`solvers`]: Levenberg-Marquardt nonlinear least-squares

pub mod interpolators;
pub mod solvers;
