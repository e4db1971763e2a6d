//! Slopes command implementation
//!
//! Prints the Hermite tangent at every sample point.

use std::io::Write;

use interp_core::math::interpolators::{estimate_slopes, SlopeMethod};
use tracing::info;

use crate::config::CliConfig;
use crate::input::Samples;
use crate::output::Table;
use crate::Result;

/// Command line overrides for the configured slope settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlopeOptions {
    pub method: Option<SlopeMethod>,
    pub tension: Option<f64>,
    pub no_monotone: bool,
}

/// Run the slopes command
pub fn run<W: Write>(
    config: &CliConfig,
    samples_path: &str,
    options: SlopeOptions,
    out: &mut W,
) -> Result<()> {
    let samples = Samples::from_path(samples_path)?;

    let method = options.method.unwrap_or(config.slopes.method);
    let tension = options.tension.unwrap_or(config.slopes.tension);
    let monotone = config.slopes.monotone && !options.no_monotone;
    info!(
        method = method.as_str(),
        tension,
        monotone,
        samples = samples.len(),
        "Estimating slopes"
    );

    let slopes = estimate_slopes(&samples.xs, &samples.ys, method, tension, monotone)?;

    Table::new()
        .column("x", &samples.xs)
        .column("y", &samples.ys)
        .column("slope", &slopes)
        .write(out, config.output.format, config.output.precision)
}
