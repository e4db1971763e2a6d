//! Fit configuration.

use interp_core::math::solvers::LMConfig;

/// Configuration shared by all parametric fits.
///
/// # Example
///
/// ```
/// use interp_models::FitConfig;
/// use interp_core::math::solvers::LMConfig;
///
/// let config = FitConfig::default()
///     .with_initial_guess(vec![0.5, 0.5, 0.1, 0.0])
///     .with_solver(LMConfig::new(1e-12, 500));
/// assert_eq!(config.solver.max_iterations, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FitConfig {
    /// Starting parameters; `None` uses the model's own guess (all ones
    /// unless the model overrides it).
    pub initial_guess: Option<Vec<f64>>,
    /// Levenberg-Marquardt settings.
    pub solver: LMConfig,
}

impl FitConfig {
    /// Create a configuration with the given solver settings.
    pub fn new(solver: LMConfig) -> Self {
        Self {
            initial_guess: None,
            solver,
        }
    }

    /// Set the starting parameters.
    pub fn with_initial_guess(mut self, guess: Vec<f64>) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Set the solver settings.
    pub fn with_solver(mut self, solver: LMConfig) -> Self {
        self.solver = solver;
        self
    }
}
