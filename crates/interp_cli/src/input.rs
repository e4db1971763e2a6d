//! Sample files and query point parsing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Largest grid the `--grid` option will expand.
const MAX_GRID_POINTS: usize = 1_000_000;

/// One CSV row of a sample file
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Sample abscissae and values, in file order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Samples {
    /// Read an `x,y` CSV file.
    pub fn from_path(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
        let samples = Self::from_reader(std::fs::File::open(path)?)?;
        debug!(path, points = samples.len(), "loaded samples");
        Ok(samples)
    }

    /// Read `x,y` CSV records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut samples = Samples::default();
        for record in csv.deserialize::<Sample>() {
            let sample = record?;
            samples.xs.push(sample.x);
            samples.ys.push(sample.y);
        }

        if samples.is_empty() {
            return Err(CliError::invalid_argument("sample file contains no rows"));
        }
        Ok(samples)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no samples
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Parse a comma-separated list of query points, e.g. `0.5,1,2.25`.
pub fn parse_points(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| CliError::invalid_argument(format!("not a number: '{}'", s)))
        })
        .collect()
}

/// Expand `START:STOP:STEP` into evenly spaced points, including `STOP` when
/// it falls on the grid.
pub fn parse_grid(spec: &str) -> Result<Vec<f64>> {
    let parts = parse_points(&spec.replace(':', ","))?;
    let [start, stop, step] = parts[..] else {
        return Err(CliError::invalid_argument(format!(
            "grid must be START:STOP:STEP, got '{}'",
            spec
        )));
    };

    if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step <= 0.0 {
        return Err(CliError::invalid_argument(format!(
            "grid needs finite bounds and a positive step, got '{}'",
            spec
        )));
    }
    if stop < start {
        return Err(CliError::invalid_argument(format!(
            "grid stop {} is below start {}",
            stop, start
        )));
    }

    let intervals = ((stop - start) / step + 1e-9).floor();
    if intervals >= MAX_GRID_POINTS as f64 {
        return Err(CliError::invalid_argument(format!(
            "grid '{}' exceeds {} points",
            spec, MAX_GRID_POINTS
        )));
    }

    Ok((0..=intervals as usize)
        .map(|i| start + i as f64 * step)
        .collect())
}

/// Resolve `--at` / `--grid` into query points; exactly one must be given.
pub fn resolve_queries(at: Option<&str>, grid: Option<&str>) -> Result<Vec<f64>> {
    match (at, grid) {
        (Some(list), None) => parse_points(list),
        (None, Some(spec)) => parse_grid(spec),
        (Some(_), Some(_)) => Err(CliError::invalid_argument(
            "--at and --grid are mutually exclusive",
        )),
        (None, None) => Err(CliError::invalid_argument(
            "query points required: pass --at or --grid",
        )),
    }
}
