//! Parametric fits exposed through the [`Interpolator`] contract.
//!
//! Every fit runs the Levenberg-Marquardt solver once at construction and
//! evaluates the fitted closed form afterwards:
//! - [`ExponentialFit`]: `(a + b·x)·exp(-c·x) + d`
//! - [`Correlation3ParamFit`]: caller-supplied three-parameter tenor correlation
//! - [`Correlation5ParamFit`]: caller-supplied five-parameter tenor correlation
//!
//! [`Interpolator`]: interp_core::math::interpolators::Interpolator

mod correlation;
mod exponential;
mod parametric;
mod tenor;

pub use correlation::{
    Correlation3ParamFit, Correlation5ParamFit, FiveParamCorrelation, FiveParamCorrelationModel,
    ThreeParamCorrelation, ThreeParamCorrelationModel,
};
pub use exponential::{ExponentialDecay, ExponentialFit};
pub use parametric::{FitDiagnostics, ParametricFit, ParametricModel};
pub use tenor::{FixedSlot, TenorLabel, TenorPairing};
