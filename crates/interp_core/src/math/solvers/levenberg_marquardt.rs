//! Levenberg-Marquardt nonlinear least-squares solver.
//!
//! Used by the parametric curve fits to find the parameter vector minimising
//! the squared distance between a closed-form model and sampled data.
//!
//! # Algorithm
//!
//! Each iteration solves the damped normal equations
//!
//! ```text
//! (JᵀJ + λI) δ = -Jᵀr
//! p_{n+1} = p_n + δ
//! ```
//!
//! where:
//! - `J` is the finite-difference Jacobian of the residuals
//! - `r` is the residual vector
//! - `λ` is the damping factor, lowered on accepted steps and raised on rejected ones
//!
//! On exit the parameter covariance is estimated as `(JᵀJ)⁻¹ · SS / (m - n)`
//! for `m` residuals and `n` parameters.
//!
//! # Example
//!
//! ```
//! use interp_core::math::solvers::{LevenbergMarquardtSolver, LMConfig};
//!
//! // Fit y = a * exp(-b * x) to data
//! let x_data = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y_data = vec![1.0, 0.37, 0.14, 0.05, 0.02];
//!
//! let solver = LevenbergMarquardtSolver::new(LMConfig::default());
//!
//! let residuals = |params: &[f64]| -> Vec<f64> {
//!     x_data.iter().zip(&y_data).map(|(&x, &y)| {
//!         params[0] * (-params[1] * x).exp() - y
//!     }).collect()
//! };
//!
//! let result = solver.solve(residuals, vec![1.0, 1.0]).unwrap();
//! assert!(result.converged);
//! assert!(result.covariance.is_some());
//! ```

use crate::types::SolverError;
use tracing::{debug, trace};

/// Configuration for Levenberg-Marquardt solver.
///
/// # Fields
///
/// * `tolerance` - Absolute residual norm, and relative decrease of the sum of squares, treated as converged
/// * `max_iterations` - Maximum number of iterations
/// * `initial_lambda` - Initial damping factor
/// * `lambda_up` - Factor to increase lambda when step is rejected
/// * `lambda_down` - Factor to decrease lambda when step is accepted
/// * `min_lambda` - Minimum value for lambda
/// * `max_lambda` - Maximum value for lambda
/// * `param_tolerance` - Relative step length treated as converged
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LMConfig {
    /// Convergence tolerance on the residual.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Initial damping factor.
    pub initial_lambda: f64,
    /// Factor to increase lambda on rejected step.
    pub lambda_up: f64,
    /// Factor to decrease lambda on accepted step.
    pub lambda_down: f64,
    /// Minimum damping factor.
    pub min_lambda: f64,
    /// Maximum damping factor.
    pub max_lambda: f64,
    /// Tolerance for parameter change convergence.
    pub param_tolerance: f64,
}

impl Default for LMConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
            min_lambda: 1e-12,
            max_lambda: 1e12,
            param_tolerance: 1e-10,
        }
    }
}

impl LMConfig {
    /// Create a configuration with the given tolerance and iteration cap.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// Relaxed tolerances for quick exploratory fits.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 50,
            param_tolerance: 1e-8,
            ..Default::default()
        }
    }
}

/// Result of Levenberg-Marquardt optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LMResult {
    /// Final optimized parameters.
    pub params: Vec<f64>,
    /// Final residual sum of squares.
    pub residual_ss: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether convergence was achieved.
    pub converged: bool,
    /// Final lambda value.
    pub final_lambda: f64,
    /// Parameter covariance estimate, row-major `n × n`.
    ///
    /// `None` when there are no more residuals than parameters or `JᵀJ` is
    /// singular at the solution.
    pub covariance: Option<Vec<Vec<f64>>>,
}

impl LMResult {
    /// Get the root mean square error.
    pub fn rmse(&self, n_observations: usize) -> f64 {
        if n_observations == 0 {
            return 0.0;
        }
        (self.residual_ss / n_observations as f64).sqrt()
    }

    /// One-sigma parameter uncertainties from the covariance diagonal.
    pub fn std_errors(&self) -> Option<Vec<f64>> {
        self.covariance
            .as_ref()
            .map(|cov| cov.iter().enumerate().map(|(i, row)| row[i].max(0.0).sqrt()).collect())
    }

    /// Turn a non-converged result into an error.
    pub fn ensure_converged(self) -> Result<Self, SolverError> {
        if self.converged {
            Ok(self)
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: self.iterations,
            })
        }
    }
}

/// Levenberg-Marquardt nonlinear least-squares solver.
///
/// Solves optimization problems of the form:
/// ```text
/// min_p ||f(p)||^2
/// ```
///
/// where `f(p)` is a vector-valued function (residuals) and `p` is a parameter vector.
#[derive(Debug, Clone, Default)]
pub struct LevenbergMarquardtSolver {
    config: LMConfig,
}

impl LevenbergMarquardtSolver {
    /// Create a new LM solver with the given configuration.
    pub fn new(config: LMConfig) -> Self {
        Self { config }
    }

    /// Solve the nonlinear least-squares problem.
    ///
    /// Running out of iterations is not an error: the best parameters found
    /// are returned with `converged = false`.
    ///
    /// # Arguments
    ///
    /// * `residuals` - Function that computes residuals given parameters
    /// * `initial_params` - Initial parameter guess
    ///
    /// # Errors
    ///
    /// `SolverError::NumericalInstability` for an empty parameter or residual
    /// vector, or non-finite residuals at the initial guess.
    pub fn solve<F>(&self, residuals: F, initial_params: Vec<f64>) -> Result<LMResult, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let n_params = initial_params.len();
        if n_params == 0 {
            return Err(SolverError::NumericalInstability(
                "Empty parameter vector".to_string(),
            ));
        }

        let mut params = initial_params;
        let mut lambda = self.config.initial_lambda;

        let mut r = residuals(&params);
        if r.is_empty() {
            return Err(SolverError::NumericalInstability(
                "Empty residual vector".to_string(),
            ));
        }
        if r.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::NumericalInstability(
                "non-finite residuals at initial guess".to_string(),
            ));
        }

        let mut ss = sum_of_squares(&r);
        let mut converged = false;
        let mut iterations = self.config.max_iterations;

        for iteration in 0..self.config.max_iterations {
            if ss.sqrt() < self.config.tolerance {
                converged = true;
                iterations = iteration;
                break;
            }

            let jacobian = Jacobian::forward_difference(&residuals, &params, &r);
            let mut jtj = jacobian.normal_matrix();
            for (i, row) in jtj.iter_mut().enumerate() {
                row[i] += lambda;
            }
            let neg_gradient: Vec<f64> = jacobian.transpose_mul(&r).iter().map(|g| -g).collect();

            let delta = match solve_cholesky(&jtj, &neg_gradient) {
                Some(d) => d,
                None => {
                    lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
                    continue;
                }
            };

            let param_change = norm(&delta);
            let param_norm = norm(&params).max(1.0);
            if param_change / param_norm < self.config.param_tolerance {
                converged = true;
                iterations = iteration;
                break;
            }

            let trial: Vec<f64> = params.iter().zip(&delta).map(|(p, d)| p + d).collect();
            let trial_r = residuals(&trial);
            let trial_ss = sum_of_squares(&trial_r);

            // NaN trial_ss fails the comparison and is rejected
            if trial_ss < ss {
                let decrease = ss - trial_ss;
                params = trial;
                r = trial_r;
                ss = trial_ss;
                lambda = (lambda * self.config.lambda_down).max(self.config.min_lambda);
                trace!(iteration, ss, lambda, "LM step accepted");

                if decrease <= self.config.tolerance * ss {
                    converged = true;
                    iterations = iteration + 1;
                    break;
                }
            } else {
                lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
                trace!(iteration, trial_ss, lambda, "LM step rejected");
            }
        }

        let covariance = estimate_covariance(&residuals, &params, &r, ss);
        debug!(
            iterations,
            converged,
            residual_ss = ss,
            "Levenberg-Marquardt finished"
        );

        Ok(LMResult {
            params,
            residual_ss: ss,
            iterations,
            converged,
            final_lambda: lambda,
            covariance,
        })
    }
}

/// Finite-difference Jacobian, one row per residual.
struct Jacobian {
    rows: Vec<Vec<f64>>,
    n_params: usize,
}

impl Jacobian {
    fn forward_difference<F>(residuals: &F, params: &[f64], r0: &[f64]) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let n_params = params.len();
        let eps = 1e-8;
        let mut rows = vec![vec![0.0; n_params]; r0.len()];

        for j in 0..n_params {
            let h = eps * params[j].abs().max(1.0);
            let mut bumped = params.to_vec();
            bumped[j] += h;
            let r_plus = residuals(&bumped);

            for (row, (rp, r)) in rows.iter_mut().zip(r_plus.iter().zip(r0)) {
                row[j] = (rp - r) / h;
            }
        }

        Self { rows, n_params }
    }

    /// `JᵀJ`
    fn normal_matrix(&self) -> Vec<Vec<f64>> {
        let mut jtj = vec![vec![0.0; self.n_params]; self.n_params];
        for row in &self.rows {
            for i in 0..self.n_params {
                for j in 0..=i {
                    jtj[i][j] += row[i] * row[j];
                }
            }
        }
        for i in 0..self.n_params {
            for j in 0..i {
                jtj[j][i] = jtj[i][j];
            }
        }
        jtj
    }

    /// `Jᵀv`
    fn transpose_mul(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.n_params];
        for (row, &vk) in self.rows.iter().zip(v) {
            for (o, &jk) in out.iter_mut().zip(row) {
                *o += jk * vk;
            }
        }
        out
    }
}

fn estimate_covariance<F>(residuals: &F, params: &[f64], r: &[f64], ss: f64) -> Option<Vec<Vec<f64>>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let n = params.len();
    let m = r.len();
    if m <= n {
        return None;
    }

    let jtj = Jacobian::forward_difference(residuals, params, r).normal_matrix();
    let scale = ss / (m - n) as f64;

    // Invert column by column
    let mut cov = vec![vec![0.0; n]; n];
    for j in 0..n {
        let mut unit = vec![0.0; n];
        unit[j] = 1.0;
        let col = solve_cholesky(&jtj, &unit)?;
        for i in 0..n {
            cov[i][j] = col[i] * scale;
        }
    }
    Some(cov)
}

#[inline]
fn sum_of_squares(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

#[inline]
fn norm(v: &[f64]) -> f64 {
    sum_of_squares(v).sqrt()
}

/// Solve Ax = b for symmetric positive definite A using Cholesky decomposition.
fn solve_cholesky(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // A = L Lᵀ
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let sum = a[i][j] - (0..j).map(|k| l[i][k] * l[j][k]).sum::<f64>();
            if i == j {
                if sum.is_nan() || sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // L y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let sum = b[i] - (0..i).map(|j| l[i][j] * y[j]).sum::<f64>();
        y[i] = sum / l[i][i];
    }

    // Lᵀ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let sum = y[i] - ((i + 1)..n).map(|j| l[j][i] * x[j]).sum::<f64>();
        x[i] = sum / l[i][i];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}
