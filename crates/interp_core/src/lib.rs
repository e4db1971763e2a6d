//! # interp_core: Shape-Preserving Interpolation Foundation
//!
//! ## Foundation Layer Role
//!
//! interp_core is the bottom layer of the workspace, providing:
//! - Domain validation for sample abscissae and query points (`math::interpolators::validate_domain`)
//! - Tangent estimation with Fritsch-Carlson monotonicity correction (`math::interpolators::estimate_slopes`)
//! - Batched piecewise cubic Hermite evaluation (`math::interpolators::evaluate_hermite`)
//! - Stateful interpolators behind a single [`Interpolator`](math::interpolators::Interpolator) trait
//! - A Levenberg-Marquardt least-squares solver used by the parametric fits (`math::solvers`)
//! - Error types: `InterpolationError`, `SolverError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics for rejected domains and solver progress
//! - rayon: Parallel batch evaluation (optional, `parallel` feature)
//! - serde: Serialisation support (optional, `serde` feature)
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::{pchip, Interpolator, MonotoneCubicInterpolator};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 1.0, 4.0];
//!
//! // One-shot evaluation
//! let values = pchip(&xs, &ys, &[0.5, 1.5, 2.5]).unwrap();
//! assert_eq!(values[1], 1.0); // flat run stays flat
//!
//! // Reusable interpolator
//! let interp = MonotoneCubicInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.x_bound("max").unwrap(), 3.0);
//! assert!(interp.x_bound("median").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): rayon-backed `par_evaluate_hermite`
//! - `serde`: Serialisation for `SlopeMethod`, `SplineExtrapolation`, the solver
//!   config and result types, and the error enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
