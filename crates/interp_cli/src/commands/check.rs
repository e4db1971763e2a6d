//! Check command implementation
//!
//! Validates a sample file and, optionally, classifies query points against
//! its domain.

use std::io::Write;

use interp_core::math::interpolators::validate_domain;
use tracing::{info, warn};

use crate::input::Samples;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(samples_path: &str, queries: Option<&[f64]>, out: &mut W) -> Result<()> {
    let samples = Samples::from_path(samples_path)?;
    let queries = queries.unwrap_or(&[]);

    let report = validate_domain(&samples.xs, queries).inspect_err(|e| {
        warn!(error = %e, "Sample domain rejected");
    })?;

    let n = samples.len();
    writeln!(out, "samples: {}", n)?;
    writeln!(out, "domain:  [{}, {}]", samples.xs[0], samples.xs[n - 1])?;
    if !queries.is_empty() {
        writeln!(
            out,
            "queries: {} ({} below, {} above the domain)",
            queries.len(),
            report.below,
            report.above
        )?;
        if report.is_extrapolating() {
            writeln!(
                out,
                "warning: {} queries will be extrapolated without shape guarantees",
                report.extrapolated()
            )?;
        }
    }
    writeln!(out, "status:  ok")?;

    info!(samples = n, extrapolated = report.extrapolated(), "Check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use interp_core::types::InterpolationError;

    fn check(body: &str, queries: Option<&[f64]>) -> Result<String> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", body).unwrap();
        let mut buf = Vec::new();
        run(&file.path().to_string_lossy(), queries, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_valid_samples() {
        let text = check("x,y\n0,1\n1,2\n2.5,0\n", None).unwrap();
        assert_eq!(text, "samples: 3\ndomain:  [0, 2.5]\nstatus:  ok\n");
    }

    #[test]
    fn test_reports_extrapolation() {
        let text = check("x,y\n0,1\n1,2\n", Some(&[-1.0, 0.5, 2.0, 3.0])).unwrap();
        assert!(text.contains("queries: 4 (1 below, 2 above the domain)"));
        assert!(text.contains("warning: 3 queries"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = check("x,y\n0,1\n1,2\n1,3\n", None);
        assert!(matches!(
            result,
            Err(CliError::Interpolation(InterpolationError::DuplicateAbscissa { index: 2, .. }))
        ));
    }

    #[test]
    fn test_single_point_rejected() {
        let result = check("x,y\n0,1\n", None);
        assert!(matches!(
            result,
            Err(CliError::Interpolation(InterpolationError::InsufficientData { got: 1, need: 2 }))
        ));
    }
}
