//! Eval command implementation
//!
//! Builds the requested interpolator from a sample file and evaluates it at
//! the query points.

use std::io::Write;

use clap::ValueEnum;
use interp_core::math::interpolators::{
    cubic_hermite_spline, CubicSplineInterpolator, Interpolator,
};
use interp_models::{ExponentialDecay, ExponentialFit, FitConfig, InterpolatorKind};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::input::Samples;
use crate::output::Table;
use crate::Result;

/// Interpolator selected with `--kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EvalKind {
    /// Monotone piecewise cubic Hermite (PCHIP)
    #[default]
    Monotone,
    /// Catmull-Rom cubic Hermite, may overshoot
    Hermite,
    /// Natural cubic spline
    Spline,
    /// Exponential decay fit
    Exponential,
}

impl EvalKind {
    /// Return the name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalKind::Monotone => "monotone",
            EvalKind::Hermite => "hermite",
            EvalKind::Spline => "spline",
            EvalKind::Exponential => "exponential",
        }
    }
}

/// Evaluate `kind` built from `samples` at `queries`.
pub fn evaluate(
    config: &CliConfig,
    samples: &Samples,
    kind: EvalKind,
    queries: &[f64],
) -> Result<Vec<f64>> {
    let (xs, ys) = (&samples.xs, &samples.ys);
    let interp = match kind {
        EvalKind::Hermite => return Ok(cubic_hermite_spline(xs, ys, queries)?),
        EvalKind::Monotone => InterpolatorKind::monotone(xs, ys)?,
        EvalKind::Spline => CubicSplineInterpolator::new(xs, ys)?
            .with_extrapolation(config.spline.extrapolation)
            .into(),
        EvalKind::Exponential => {
            let fit_config = FitConfig::new(config.solver);
            ExponentialFit::fit(ExponentialDecay, xs, ys, &fit_config)?.into()
        }
    };
    Ok(interp.interpolate_many(queries)?)
}

/// Run the eval command
pub fn run<W: Write>(
    config: &CliConfig,
    samples_path: &str,
    queries: &[f64],
    kind: EvalKind,
    format: Option<OutputFormat>,
    out: &mut W,
) -> Result<()> {
    let samples = Samples::from_path(samples_path)?;
    info!(
        kind = kind.as_str(),
        samples = samples.len(),
        queries = queries.len(),
        "Evaluating interpolator"
    );

    let values = evaluate(config, &samples, kind, queries)?;

    Table::new()
        .column("x", queries)
        .column("y", &values)
        .write(out, format.unwrap_or(config.output.format), config.output.precision)
}
