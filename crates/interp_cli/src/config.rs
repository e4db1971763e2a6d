//! CLI configuration management
//!
//! Settings are layered, lowest priority first: built-in defaults, the TOML
//! file named by `--config`, then `INTERP_*` environment variables
//! (`INTERP_LOG_LEVEL`, `INTERP_SLOPES__METHOD`, `INTERP_SOLVER__MAX_ITERATIONS`,
//! ...). A missing file is not an error.

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use interp_core::math::interpolators::{SlopeMethod, SplineExtrapolation};
use interp_core::math::solvers::LMConfig;
use serde::Deserialize;

use crate::{CliError, Result};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "INTERP";

/// Log levels accepted in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::invalid_argument(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for tabular results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// Array of JSON objects
    Json,
    /// CSV with a header row
    Csv,
}

/// Defaults for the `slopes` command
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlopesConfig {
    /// Interior tangent method
    pub method: SlopeMethod,
    /// Cardinal tension
    pub tension: f64,
    /// Apply the Fritsch-Carlson correction
    pub monotone: bool,
}

impl Default for SlopesConfig {
    fn default() -> Self {
        Self {
            method: SlopeMethod::Secant,
            tension: 0.0,
            monotone: true,
        }
    }
}

/// Settings for `--kind spline`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Out-of-domain behaviour
    pub extrapolation: SplineExtrapolation,
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: OutputFormat,
    /// Digits after the decimal point in table and CSV output
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 6,
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Slope estimation defaults
    pub slopes: SlopesConfig,
    /// Cubic spline settings
    pub spline: SplineConfig,
    /// Levenberg-Marquardt settings for fits
    pub solver: LMConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from `path` and the environment.
    pub fn load(path: &Path) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<CliConfig>()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.slopes.tension) {
            errors.push(format!(
                "slopes.tension must lie in [0, 1], got {}",
                self.slopes.tension
            ));
        }
        if self.solver.max_iterations == 0 {
            errors.push("solver.max_iterations must be greater than 0".to_string());
        }
        if self.solver.tolerance.is_nan() || self.solver.tolerance <= 0.0 {
            errors.push(format!(
                "solver.tolerance must be positive, got {}",
                self.solver.tolerance
            ));
        }
        if self.output.precision > 17 {
            errors.push(format!(
                "output.precision {} exceeds maximum allowed (17)",
                self.output.precision
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::invalid_argument(errors.join("; ")))
        }
    }
}
