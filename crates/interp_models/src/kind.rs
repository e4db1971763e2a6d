//! Tagged dispatch over every interpolator in the workspace.

use crate::error::FitError;
use crate::fitting::{Correlation3ParamFit, Correlation5ParamFit, ExponentialFit};
use interp_core::math::interpolators::{
    CubicSplineInterpolator, Interpolator, MonotoneCubicInterpolator,
};
use interp_core::types::InterpolationError;

/// Static dispatch enum wrapping the concrete interpolators.
///
/// The variant is chosen at construction; afterwards every kind answers the
/// same [`Interpolator`] contract. Only [`InterpolatorKind::MonotoneCubic`]
/// supports [`update`](InterpolatorKind::update).
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::Interpolator;
/// use interp_models::InterpolatorKind;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let mut interp = InterpolatorKind::monotone(&xs, &[0.0, 1.0, 1.0, 2.0]).unwrap();
/// assert_eq!(interp.name(), "monotone-cubic");
/// assert_eq!(interp.interpolate(1.5).unwrap(), 1.0);
///
/// interp.update(&[0.0, 2.0, 2.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(1.5).unwrap(), 2.0);
///
/// let spline = InterpolatorKind::spline(&xs, &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert_eq!(spline.x_bound("max").unwrap(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub enum InterpolatorKind {
    /// Monotone piecewise cubic Hermite (PCHIP)
    MonotoneCubic(MonotoneCubicInterpolator<f64>),
    /// Natural cubic spline
    CubicSpline(CubicSplineInterpolator<f64>),
    /// Exponential decay fit
    Exponential(ExponentialFit),
    /// Three-parameter correlation fit
    Correlation3P(Correlation3ParamFit),
    /// Five-parameter correlation fit
    Correlation5P(Correlation5ParamFit),
}

impl InterpolatorKind {
    /// Create a monotone cubic variant.
    #[inline]
    pub fn monotone(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        MonotoneCubicInterpolator::new(xs, ys).map(InterpolatorKind::MonotoneCubic)
    }

    /// Create a natural cubic spline variant with default extrapolation.
    #[inline]
    pub fn spline(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        CubicSplineInterpolator::new(xs, ys).map(InterpolatorKind::CubicSpline)
    }

    /// Fit an exponential decay variant with the default configuration.
    #[inline]
    pub fn exponential(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        ExponentialFit::new(xs, ys).map(InterpolatorKind::Exponential)
    }

    /// Short name of the active variant.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolatorKind::MonotoneCubic(_) => "monotone-cubic",
            InterpolatorKind::CubicSpline(_) => "cubic-spline",
            InterpolatorKind::Exponential(_) => "exponential",
            InterpolatorKind::Correlation3P(_) => "correlation-3p",
            InterpolatorKind::Correlation5P(_) => "correlation-5p",
        }
    }

    /// Replace the sample values, keeping the abscissae.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidInput` for a length mismatch, or for any
    /// variant other than `MonotoneCubic`.
    pub fn update(&mut self, ys: &[f64]) -> Result<(), InterpolationError> {
        match self {
            InterpolatorKind::MonotoneCubic(interp) => interp.update(ys),
            other => Err(InterpolationError::InvalidInput(format!(
                "update is not supported for {} interpolators",
                other.name()
            ))),
        }
    }
}

impl Interpolator<f64> for InterpolatorKind {
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        match self {
            InterpolatorKind::MonotoneCubic(interp) => interp.interpolate(x),
            InterpolatorKind::CubicSpline(interp) => interp.interpolate(x),
            InterpolatorKind::Exponential(fit) => fit.interpolate(x),
            InterpolatorKind::Correlation3P(fit) => fit.interpolate(x),
            InterpolatorKind::Correlation5P(fit) => fit.interpolate(x),
        }
    }

    fn interpolate_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        match self {
            InterpolatorKind::MonotoneCubic(interp) => interp.interpolate_many(xs),
            InterpolatorKind::CubicSpline(interp) => interp.interpolate_many(xs),
            InterpolatorKind::Exponential(fit) => fit.interpolate_many(xs),
            InterpolatorKind::Correlation3P(fit) => fit.interpolate_many(xs),
            InterpolatorKind::Correlation5P(fit) => fit.interpolate_many(xs),
        }
    }

    fn domain(&self) -> (f64, f64) {
        match self {
            InterpolatorKind::MonotoneCubic(interp) => interp.domain(),
            InterpolatorKind::CubicSpline(interp) => interp.domain(),
            InterpolatorKind::Exponential(fit) => fit.domain(),
            InterpolatorKind::Correlation3P(fit) => fit.domain(),
            InterpolatorKind::Correlation5P(fit) => fit.domain(),
        }
    }
}

impl From<MonotoneCubicInterpolator<f64>> for InterpolatorKind {
    fn from(interp: MonotoneCubicInterpolator<f64>) -> Self {
        InterpolatorKind::MonotoneCubic(interp)
    }
}

impl From<CubicSplineInterpolator<f64>> for InterpolatorKind {
    fn from(interp: CubicSplineInterpolator<f64>) -> Self {
        InterpolatorKind::CubicSpline(interp)
    }
}

impl From<ExponentialFit> for InterpolatorKind {
    fn from(fit: ExponentialFit) -> Self {
        InterpolatorKind::Exponential(fit)
    }
}

impl From<Correlation3ParamFit> for InterpolatorKind {
    fn from(fit: Correlation3ParamFit) -> Self {
        InterpolatorKind::Correlation3P(fit)
    }
}

impl From<Correlation5ParamFit> for InterpolatorKind {
    fn from(fit: Correlation5ParamFit) -> Self {
        InterpolatorKind::Correlation5P(fit)
    }
}
