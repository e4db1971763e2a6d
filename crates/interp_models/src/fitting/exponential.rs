//! Exponential decay fit.

use super::parametric::{ParametricFit, ParametricModel};
use crate::config::FitConfig;
use crate::error::FitError;

/// `y = (a + b·x)·exp(-c·x) + d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExponentialDecay;

impl ParametricModel<4> for ExponentialDecay {
    fn name(&self) -> &'static str {
        "exponential"
    }

    #[inline]
    fn evaluate(&self, x: f64, p: &[f64; 4]) -> f64 {
        (p[0] + p[1] * x) * (-p[2] * x).exp() + p[3]
    }
}

/// Exponential decay fitted to samples; parameters `[a, b, c, d]`.
pub type ExponentialFit = ParametricFit<ExponentialDecay, 4>;

impl ParametricFit<ExponentialDecay, 4> {
    /// Fit with the default configuration (all-ones starting point).
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::Interpolator;
    /// use interp_models::ExponentialFit;
    ///
    /// let xs: Vec<f64> = (0..12).map(|i| i as f64).collect();
    /// let ys: Vec<f64> = xs.iter().map(|&x| (1.2 + 0.6 * x) * (-0.8 * x).exp() + 0.9).collect();
    ///
    /// let fit = ExponentialFit::new(&xs, &ys).unwrap();
    /// assert!((fit.interpolate(2.5).unwrap() - ((1.2 + 1.5) * (-2.0_f64).exp() + 0.9)).abs() < 1e-6);
    /// ```
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        Self::fit(ExponentialDecay, xs, ys, &FitConfig::default())
    }
}
