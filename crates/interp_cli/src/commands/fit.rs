//! Fit command implementation
//!
//! Fits `y = (a + b·x)·exp(-c·x) + d` to a sample file and prints the
//! parameters with solver diagnostics.

use std::io::Write;

use interp_models::{ExponentialDecay, ExponentialFit, FitConfig, ParametricModel};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::input::Samples;
use crate::output::number;
use crate::Result;

const PARAM_NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// Run the fit command
pub fn run<W: Write>(
    config: &CliConfig,
    samples_path: &str,
    initial_guess: Option<Vec<f64>>,
    format: Option<OutputFormat>,
    out: &mut W,
) -> Result<()> {
    let samples = Samples::from_path(samples_path)?;

    let mut fit_config = FitConfig::new(config.solver);
    if let Some(guess) = initial_guess {
        fit_config = fit_config.with_initial_guess(guess);
    }

    info!(samples = samples.len(), "Fitting exponential decay");
    let fit = ExponentialFit::fit(ExponentialDecay, &samples.xs, &samples.ys, &fit_config)?;
    let diagnostics = fit.diagnostics();
    let std_errors = diagnostics.std_errors();
    info!(
        params = ?fit.params(),
        iterations = diagnostics.iterations,
        "Fit complete"
    );

    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let params: Map<String, Value> = PARAM_NAMES
                .iter()
                .zip(fit.params())
                .map(|(name, &p)| (name.to_string(), number(p)))
                .collect();
            let report = json!({
                "model": fit.model().name(),
                "params": params,
                "std_errors": std_errors
                    .as_ref()
                    .map(|errs| errs.iter().map(|&e| number(e)).collect::<Vec<_>>()),
                "residual_ss": number(diagnostics.residual_ss),
                "rmse": number(diagnostics.rmse),
                "iterations": diagnostics.iterations,
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let precision = config.output.precision;
            writeln!(out, "model: {}", fit.model().name())?;
            for (i, (name, p)) in PARAM_NAMES.iter().zip(fit.params()).enumerate() {
                write!(out, "{} = {:.*}", name, precision, p)?;
                if let Some(errs) = &std_errors {
                    write!(out, " ± {:.*}", precision, errs[i])?;
                }
                writeln!(out)?;
            }
            writeln!(out, "residual_ss = {:.6e}", diagnostics.residual_ss)?;
            writeln!(out, "rmse = {:.6e}", diagnostics.rmse)?;
            writeln!(out, "iterations = {}", diagnostics.iterations)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use interp_models::FitError;

    fn decay_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        for i in 0..12 {
            let x = i as f64 * 0.5;
            writeln!(file, "{},{}", x, (1.0 + 0.5 * x) * (-0.9 * x).exp() + 0.25).unwrap();
        }
        file
    }

    #[test]
    fn test_fit_json_report() {
        let file = decay_file();
        let mut buf = Vec::new();
        run(
            &CliConfig::default(),
            &file.path().to_string_lossy(),
            None,
            Some(OutputFormat::Json),
            &mut buf,
        )
        .unwrap();

        let report: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(report["model"], "exponential");
        assert_relative_eq!(report["params"]["a"].as_f64().unwrap(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(report["params"]["c"].as_f64().unwrap(), 0.9, epsilon = 1e-5);
        assert_relative_eq!(report["params"]["d"].as_f64().unwrap(), 0.25, epsilon = 1e-5);
        assert!(report["iterations"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_fit_table_report() {
        let file = decay_file();
        let mut buf = Vec::new();
        run(&CliConfig::default(), &file.path().to_string_lossy(), None, None, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("model: exponential\n"));
        assert!(text.contains("b = 0.5"));
        assert!(text.contains("iterations = "));
    }

    #[test]
    fn test_fit_wrong_guess_length() {
        let file = decay_file();
        let result = run(
            &CliConfig::default(),
            &file.path().to_string_lossy(),
            Some(vec![1.0, 1.0]),
            None,
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(result, Err(CliError::Fit(FitError::Domain(_)))));
    }
}
