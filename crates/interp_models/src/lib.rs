//! # interp_models: Parametric Fits and Interpolator Dispatch
//!
//! Builds on [`interp_core`] with:
//! - A parametric fit framework ([`ParametricModel`], [`ParametricFit`]) driving
//!   the core Levenberg-Marquardt solver
//! - [`ExponentialFit`] for `(a + b·x)·exp(-c·x) + d`
//! - [`Correlation3ParamFit`] and [`Correlation5ParamFit`] over caller-supplied
//!   tenor correlation functions, with [`TenorPairing`] as fit context
//! - [`InterpolatorKind`], a tagged enum selecting any interpolator at
//!   construction time
//!
//! ## Usage
//!
//! ```rust
//! use interp_core::math::interpolators::Interpolator;
//! use interp_models::{ExponentialFit, InterpolatorKind};
//!
//! let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * (-0.5 * x).exp() + 1.0).collect();
//!
//! let fit = ExponentialFit::new(&xs, &ys).unwrap();
//! let kind = InterpolatorKind::from(fit);
//! assert!((kind.interpolate(4.0).unwrap() - ys[4]).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`FitConfig`], [`FitDiagnostics`], [`FitError`]
//!   and the tenor types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod fitting;
pub mod kind;

pub use config::FitConfig;
pub use error::FitError;
pub use fitting::{
    Correlation3ParamFit, Correlation5ParamFit, ExponentialDecay, ExponentialFit,
    FitDiagnostics, FiveParamCorrelation, FiveParamCorrelationModel, FixedSlot, ParametricFit,
    ParametricModel, TenorLabel, TenorPairing, ThreeParamCorrelation, ThreeParamCorrelationModel,
};
pub use kind::InterpolatorKind;
