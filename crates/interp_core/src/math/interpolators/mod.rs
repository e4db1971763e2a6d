//! One-dimensional interpolation.
//!
//! This module provides monotonicity-preserving piecewise cubic Hermite
//! interpolation (PCHIP) and its building blocks, plus a natural cubic
//! spline. All routines are generic over `T: num_traits::Float`.
//!
//! ## Building Blocks
//!
//! Data flows through three stages:
//!
//! 1. [`validate_domain`]: rejects unsorted or repeated abscissae and counts
//!    queries that will be extrapolated
//! 2. [`estimate_slopes`]: per-sample tangents by [`SlopeMethod`], with
//!    optional Fritsch-Carlson correction
//! 3. [`evaluate_hermite`]: piecewise cubic Hermite evaluation at a batch of
//!    queries
//!
//! [`pchip`] and [`cubic_hermite_spline`] compose the three in one call.
//!
//! ## Available Interpolators
//!
//! - [`MonotoneCubicInterpolator`]: Fritsch-Carlson monotone cubic with `update`
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `interpolate_many(xs: &[T])`: Batch evaluation
//! - `domain() -> (T, T)`: Return the sample range
//! - `x_bound("min" | "max")`: One end of the sample range
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{estimate_slopes, evaluate_hermite, SlopeMethod};
//!
//! let xs = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
//! let ys = [-1.0, -1.0, -1.0, 0.0, 1.0, 1.0, 1.0];
//!
//! let m = estimate_slopes(&xs, &ys, SlopeMethod::Secant, 0.0, true).unwrap();
//! assert_eq!(m, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
//!
//! let v = evaluate_hermite(&xs, &ys, &m, &[-2.5, -1.5]).unwrap();
//! assert_eq!(v, vec![-1.0, -1.0]);
//! ```
//!
//! [`InterpolationError`]: crate::types::InterpolationError

mod cubic_spline;
mod domain;
mod hermite;
mod monotone_cubic;
mod pchip;
mod slopes;
mod traits;

// Re-export public types at module level
pub use cubic_spline::{CubicSplineInterpolator, SplineExtrapolation};
pub use domain::{is_valid_domain, validate_abscissae, validate_domain, DomainReport};
#[cfg(feature = "parallel")]
pub use hermite::par_evaluate_hermite;
pub use hermite::{bucket_index, evaluate_hermite, evaluate_hermite_at};
pub use monotone_cubic::MonotoneCubicInterpolator;
pub use pchip::{cubic_hermite_spline, pchip};
pub use slopes::{estimate_slopes, SlopeMethod};
pub use traits::{BoundSelector, Interpolator};
