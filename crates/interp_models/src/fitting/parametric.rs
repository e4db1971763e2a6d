//! Generic closed-form model fitted by nonlinear least squares.

use crate::config::FitConfig;
use crate::error::FitError;
use interp_core::math::interpolators::{validate_abscissae, Interpolator};
use interp_core::math::solvers::LevenbergMarquardtSolver;
use interp_core::types::{InterpolationError, SolverError};
use tracing::debug;

/// A closed-form curve `y = f(x; p)` with `N` parameters.
pub trait ParametricModel<const N: usize> {
    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;

    /// Evaluate the model at `x`.
    fn evaluate(&self, x: f64, params: &[f64; N]) -> f64;

    /// Default starting point for the solver.
    fn initial_guess(&self) -> [f64; N] {
        [1.0; N]
    }
}

/// Solver diagnostics retained by a fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitDiagnostics {
    /// Residual sum of squares at the solution
    pub residual_ss: f64,
    /// Root mean square residual
    pub rmse: f64,
    /// Solver iterations
    pub iterations: usize,
    /// Parameter covariance, when estimable
    pub covariance: Option<Vec<Vec<f64>>>,
}

impl FitDiagnostics {
    /// One-sigma parameter uncertainties from the covariance diagonal.
    pub fn std_errors(&self) -> Option<Vec<f64>> {
        self.covariance.as_ref().map(|cov| {
            cov.iter()
                .enumerate()
                .map(|(i, row)| row[i].max(0.0).sqrt())
                .collect()
        })
    }
}

/// A model with parameters fitted to samples.
///
/// Evaluation is direct substitution into the model, at any `x`; the
/// domain reported through [`Interpolator`] is the span of the fitted
/// samples.
#[derive(Debug, Clone)]
pub struct ParametricFit<M, const N: usize> {
    model: M,
    x_min: f64,
    x_max: f64,
    params: [f64; N],
    diagnostics: FitDiagnostics,
}

impl<M: ParametricModel<N>, const N: usize> ParametricFit<M, N> {
    /// Fit `model` to the samples.
    ///
    /// # Arguments
    ///
    /// * `model` - The closed form to fit
    /// * `xs` - Strictly increasing abscissae, at least `N` of them
    /// * `ys` - Observed values
    /// * `config` - Starting point and solver settings
    ///
    /// # Errors
    ///
    /// * `FitError::Domain` - Mismatched lengths, bad abscissae, too few
    ///   points or a starting point of the wrong length
    /// * `FitError::Solver` - The solver could not start (e.g. non-finite
    ///   residuals at the starting point)
    /// * `FitError::NotConverged` - Iteration limit reached
    /// * `FitError::NonFiniteParameters` - Converged to NaN or infinity
    pub fn fit(model: M, xs: &[f64], ys: &[f64], config: &FitConfig) -> Result<Self, FitError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            ))
            .into());
        }
        validate_abscissae(xs)?;
        if xs.len() < N {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: N,
            }
            .into());
        }

        let initial = match &config.initial_guess {
            Some(guess) if guess.len() != N => {
                return Err(InterpolationError::InvalidInput(format!(
                    "{} takes {} parameters, initial guess has {}",
                    model.name(),
                    N,
                    guess.len()
                ))
                .into());
            }
            Some(guess) => guess.clone(),
            None => model.initial_guess().to_vec(),
        };

        let residuals = |p: &[f64]| -> Vec<f64> {
            let params = to_array::<N>(p);
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| model.evaluate(x, &params) - y)
                .collect()
        };

        let result = LevenbergMarquardtSolver::new(config.solver).solve(residuals, initial)?;
        let residual_ss = result.residual_ss;
        let result = result.ensure_converged().map_err(|e| match e {
            SolverError::MaxIterationsExceeded { iterations } => FitError::NotConverged {
                iterations,
                residual_ss,
            },
            other => FitError::Solver(other),
        })?;
        if result.params.iter().any(|p| !p.is_finite()) {
            return Err(FitError::NonFiniteParameters {
                params: result.params,
            });
        }

        debug!(
            model = model.name(),
            params = ?result.params,
            residual_ss = result.residual_ss,
            iterations = result.iterations,
            "fitted parametric model"
        );

        let diagnostics = FitDiagnostics {
            residual_ss: result.residual_ss,
            rmse: result.rmse(xs.len()),
            iterations: result.iterations,
            covariance: result.covariance,
        };

        Ok(Self {
            params: to_array::<N>(&result.params),
            model,
            x_min: xs[0],
            x_max: xs[xs.len() - 1],
            diagnostics,
        })
    }

    /// Fitted parameters.
    #[inline]
    pub fn params(&self) -> &[f64; N] {
        &self.params
    }

    /// Solver diagnostics from the fit.
    #[inline]
    pub fn diagnostics(&self) -> &FitDiagnostics {
        &self.diagnostics
    }

    /// The fitted model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: ParametricModel<N>, const N: usize> Interpolator<f64> for ParametricFit<M, N> {
    #[inline]
    fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.model.evaluate(x, &self.params))
    }

    #[inline]
    fn domain(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }
}

#[inline]
fn to_array<const N: usize>(p: &[f64]) -> [f64; N] {
    let mut out = [0.0; N];
    out.copy_from_slice(&p[..N]);
    out
}
