//! Tenor correlation fits.
//!
//! The correlation function itself is supplied by the caller. Each sample
//! `(x, y)` is read as "the correlation between the fixed tenor and an
//! `x`-year tenor is `y`", and the function's parameters are fitted to the
//! samples by least squares.

use std::fmt;
use std::sync::Arc;

use super::parametric::{ParametricFit, ParametricModel};
use super::tenor::TenorPairing;
use crate::config::FitConfig;
use crate::error::FitError;

/// A three-parameter correlation between two tenors.
///
/// Closures `Fn(&[f64; 3], &str, &str) -> f64` implement this trait.
pub trait ThreeParamCorrelation: Send + Sync {
    /// Correlation between `tenor1` and `tenor2` under `params`.
    fn correlation(&self, params: &[f64; 3], tenor1: &str, tenor2: &str) -> f64;
}

impl<F> ThreeParamCorrelation for F
where
    F: Fn(&[f64; 3], &str, &str) -> f64 + Send + Sync,
{
    #[inline]
    fn correlation(&self, params: &[f64; 3], tenor1: &str, tenor2: &str) -> f64 {
        self(params, tenor1, tenor2)
    }
}

/// A five-parameter correlation between two tenors with an extra scalar
/// factor.
///
/// Closures `Fn(&[f64; 5], f64, &str, &str) -> f64` implement this trait.
pub trait FiveParamCorrelation: Send + Sync {
    /// Correlation between `tenor1` and `tenor2` under `params` and `factor`.
    fn correlation(&self, params: &[f64; 5], factor: f64, tenor1: &str, tenor2: &str) -> f64;
}

impl<F> FiveParamCorrelation for F
where
    F: Fn(&[f64; 5], f64, &str, &str) -> f64 + Send + Sync,
{
    #[inline]
    fn correlation(&self, params: &[f64; 5], factor: f64, tenor1: &str, tenor2: &str) -> f64 {
        self(params, factor, tenor1, tenor2)
    }
}

/// Three-parameter correlation against a fixed tenor.
#[derive(Clone)]
pub struct ThreeParamCorrelationModel {
    pairing: TenorPairing,
    function: Arc<dyn ThreeParamCorrelation>,
}

impl ThreeParamCorrelationModel {
    /// Wrap `function` with the fixed-tenor pairing.
    pub fn new<F: ThreeParamCorrelation + 'static>(pairing: TenorPairing, function: F) -> Self {
        Self::shared(pairing, Arc::new(function))
    }

    /// Use an already shared correlation function.
    pub fn shared(pairing: TenorPairing, function: Arc<dyn ThreeParamCorrelation>) -> Self {
        Self { pairing, function }
    }

    /// The fixed-tenor pairing.
    #[inline]
    pub fn pairing(&self) -> &TenorPairing {
        &self.pairing
    }
}

impl fmt::Debug for ThreeParamCorrelationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreeParamCorrelationModel")
            .field("pairing", &self.pairing)
            .finish_non_exhaustive()
    }
}

impl ParametricModel<3> for ThreeParamCorrelationModel {
    fn name(&self) -> &'static str {
        "correlation-3p"
    }

    fn evaluate(&self, x: f64, params: &[f64; 3]) -> f64 {
        let (tenor1, tenor2) = self.pairing.labels(x);
        self.function
            .correlation(params, tenor1.as_str(), tenor2.as_str())
    }
}

/// Five-parameter correlation against a fixed tenor.
#[derive(Clone)]
pub struct FiveParamCorrelationModel {
    pairing: TenorPairing,
    factor: f64,
    function: Arc<dyn FiveParamCorrelation>,
}

impl FiveParamCorrelationModel {
    /// Wrap `function` with the fixed-tenor pairing and factor.
    pub fn new<F: FiveParamCorrelation + 'static>(
        pairing: TenorPairing,
        factor: f64,
        function: F,
    ) -> Self {
        Self::shared(pairing, factor, Arc::new(function))
    }

    /// Use an already shared correlation function.
    pub fn shared(
        pairing: TenorPairing,
        factor: f64,
        function: Arc<dyn FiveParamCorrelation>,
    ) -> Self {
        Self {
            pairing,
            factor,
            function,
        }
    }

    /// The fixed-tenor pairing.
    #[inline]
    pub fn pairing(&self) -> &TenorPairing {
        &self.pairing
    }

    /// The scalar passed through to the correlation function.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl fmt::Debug for FiveParamCorrelationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiveParamCorrelationModel")
            .field("pairing", &self.pairing)
            .field("factor", &self.factor)
            .finish_non_exhaustive()
    }
}

impl ParametricModel<5> for FiveParamCorrelationModel {
    fn name(&self) -> &'static str {
        "correlation-5p"
    }

    fn evaluate(&self, x: f64, params: &[f64; 5]) -> f64 {
        let (tenor1, tenor2) = self.pairing.labels(x);
        self.function
            .correlation(params, self.factor, tenor1.as_str(), tenor2.as_str())
    }
}

/// Three-parameter correlation fitted to samples.
pub type Correlation3ParamFit = ParametricFit<ThreeParamCorrelationModel, 3>;

/// Five-parameter correlation fitted to samples.
pub type Correlation5ParamFit = ParametricFit<FiveParamCorrelationModel, 5>;

impl ParametricFit<ThreeParamCorrelationModel, 3> {
    /// Fit with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::Interpolator;
    /// use interp_models::{Correlation3ParamFit, TenorLabel, TenorPairing, ThreeParamCorrelationModel};
    ///
    /// let sc3 = |p: &[f64; 3], t1: &str, t2: &str| {
    ///     let d = (TenorLabel::new(t1).years().unwrap_or(0.0)
    ///         - TenorLabel::new(t2).years().unwrap_or(0.0))
    ///     .abs();
    ///     p[0] + p[1] * d + p[2] * d * d
    /// };
    /// let model = ThreeParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), sc3);
    ///
    /// let xs = [1.0, 2.0, 5.0, 7.0, 10.0];
    /// let ys: Vec<f64> = xs.iter().map(|x: &f64| {
    ///     let d = (10.0 - *x).abs();
    ///     1.0 - 0.05 * d + 0.001 * d * d
    /// }).collect();
    ///
    /// let fit = Correlation3ParamFit::new(model, &xs, &ys).unwrap();
    /// assert!((fit.interpolate(10.0).unwrap() - 1.0).abs() < 1e-6);
    /// ```
    pub fn new(
        model: ThreeParamCorrelationModel,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Self, FitError> {
        Self::fit(model, xs, ys, &FitConfig::default())
    }
}

impl ParametricFit<FiveParamCorrelationModel, 5> {
    /// Fit with the default configuration.
    pub fn new(model: FiveParamCorrelationModel, xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        Self::fit(model, xs, ys, &FitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::tenor::TenorLabel;
    use approx::assert_relative_eq;
    use interp_core::math::interpolators::Interpolator;
    use interp_core::types::SolverError;

    fn years(label: &str) -> f64 {
        TenorLabel::new(label).years().unwrap_or(f64::NAN)
    }

    fn distance(t1: &str, t2: &str) -> f64 {
        (years(t1) - years(t2)).abs()
    }

    fn sc3(p: &[f64; 3], t1: &str, t2: &str) -> f64 {
        let d = distance(t1, t2);
        p[0] + p[1] * d + p[2] * d * d
    }

    /// Asymmetric in the tenors so slot placement is observable.
    fn five_param(p: &[f64; 5], factor: f64, t1: &str, t2: &str) -> f64 {
        let (a, b) = (years(t1), years(t2));
        p[0] + p[1] * (a - b).abs() + p[2] * (a * b).sqrt() + factor * (p[3] * b + p[4] * b.ln())
    }

    // ========================================
    // Model Evaluation Tests
    // ========================================

    #[test]
    fn test_three_param_uses_pairing() {
        let captured = |_p: &[f64; 3], t1: &str, t2: &str| {
            if t1 == "10Y" && t2 == "2.5Y" {
                1.0
            } else {
                0.0
            }
        };
        let first = ThreeParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), captured);
        assert_eq!(first.evaluate(2.5, &[0.0; 3]), 1.0);

        let second = ThreeParamCorrelationModel::new(TenorPairing::fixed_second("10Y"), captured);
        assert_eq!(second.evaluate(2.5, &[0.0; 3]), 0.0);
    }

    #[test]
    fn test_five_param_passes_factor() {
        let model = FiveParamCorrelationModel::new(TenorPairing::fixed_second("4Y"), 2.0, five_param);
        let p = [0.0, 0.0, 0.0, 1.0, 0.0];
        // b = 4, factor 2
        assert_relative_eq!(model.evaluate(3.0, &p), 8.0);
        assert_eq!(model.factor(), 2.0);
    }

    #[test]
    fn test_debug_omits_function() {
        let model = ThreeParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), sc3);
        let text = format!("{:?}", model);
        assert!(text.contains("ThreeParamCorrelationModel"));
        assert!(text.contains("10Y"));
    }

    // ========================================
    // Fit Tests
    // ========================================

    #[test]
    fn test_three_param_fit_recovers_parameters() {
        let truth = [0.95, -0.04, 0.0015];
        let model = ThreeParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), sc3);
        let xs = [1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 15.0, 20.0];
        let ys: Vec<f64> = xs.iter().map(|&x| model.evaluate(x, &truth)).collect();

        let fit = Correlation3ParamFit::new(model, &xs, &ys).unwrap();
        for (p, t) in fit.params().iter().zip(truth.iter()) {
            assert_relative_eq!(p, t, epsilon = 1e-7);
        }
        assert_relative_eq!(fit.interpolate(4.0).unwrap(), 0.95 - 0.24 + 0.054, epsilon = 1e-7);
        assert_eq!(fit.domain(), (1.0, 20.0));
    }

    #[test]
    fn test_five_param_fit_recovers_parameters() {
        let truth = [0.9, -0.01, 0.02, 0.001, -0.0005];
        let model = FiveParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), 0.5, five_param);
        let xs = [1.0, 2.0, 3.0, 5.0, 7.0, 12.0, 15.0, 20.0, 30.0];
        let ys: Vec<f64> = xs.iter().map(|&x| model.evaluate(x, &truth)).collect();

        let fit = Correlation5ParamFit::new(model, &xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(fit.interpolate(x).unwrap(), y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_shared_function_between_models() {
        let function: Arc<dyn ThreeParamCorrelation> = Arc::new(sc3);
        let a = ThreeParamCorrelationModel::shared(TenorPairing::fixed_first("5Y"), function.clone());
        let b = ThreeParamCorrelationModel::shared(TenorPairing::fixed_second("5Y"), function);
        let p = [1.0, 0.1, 0.0];
        // Distance is symmetric
        assert_relative_eq!(a.evaluate(2.0, &p), b.evaluate(2.0, &p));
    }

    #[test]
    fn test_nan_correlation_fails() {
        let model = ThreeParamCorrelationModel::new(
            TenorPairing::fixed_first("10Y"),
            |_p: &[f64; 3], _t1: &str, _t2: &str| f64::NAN,
        );
        let result = Correlation3ParamFit::new(model, &[1.0, 2.0, 3.0], &[0.9, 0.8, 0.7]);
        assert!(matches!(
            result,
            Err(FitError::Solver(SolverError::NumericalInstability(_)))
        ));
    }

    #[test]
    fn test_unsorted_tenors_rejected() {
        let model = ThreeParamCorrelationModel::new(TenorPairing::fixed_first("10Y"), sc3);
        let result = Correlation3ParamFit::new(model, &[1.0, 3.0, 2.0], &[0.9, 0.8, 0.7]);
        assert!(result.unwrap_err().is_data_error());
    }
}
