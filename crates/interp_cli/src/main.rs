//! interp - Command Line Interpolation Tool
//!
//! Operational entry point for the neutryx-interp libraries.
//!
//! # Commands
//!
//! - `interp eval --samples <file> --at <list>` - Evaluate an interpolator at query points
//! - `interp slopes --samples <file>` - Print Hermite tangents at the samples
//! - `interp check --samples <file>` - Validate a sample file
//! - `interp fit --samples <file>` - Fit an exponential decay
//!
//! Sample files are CSV with `x,y` headers. Settings come from `interp.toml`
//! (or `--config`) and `INTERP_*` environment variables; `RUST_LOG` overrides
//! the configured log level.

use std::path::Path;

use clap::{Parser, Subcommand};
use interp_core::math::interpolators::SlopeMethod;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use crate::commands::eval::EvalKind;
use crate::commands::slopes::SlopeOptions;
use crate::config::{CliConfig, LogLevel, OutputFormat};

/// Shape-preserving interpolation from the command line
#[derive(Parser)]
#[command(name = "interp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "interp.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an interpolator at query points
    Eval {
        /// Path to an x,y sample file (CSV)
        #[arg(short, long)]
        samples: String,

        /// Comma-separated query points
        #[arg(long, conflicts_with = "grid", allow_hyphen_values = true)]
        at: Option<String>,

        /// Evenly spaced query points as START:STOP:STEP
        #[arg(long, allow_hyphen_values = true)]
        grid: Option<String>,

        /// Interpolator to build
        #[arg(short, long, value_enum, default_value_t = EvalKind::Monotone)]
        kind: EvalKind,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the Hermite tangent at every sample
    Slopes {
        /// Path to an x,y sample file (CSV)
        #[arg(short, long)]
        samples: String,

        /// Tangent method (secant, catmull-rom, cardinal)
        #[arg(short, long)]
        method: Option<SlopeMethod>,

        /// Cardinal tension in [0, 1]
        #[arg(short, long)]
        tension: Option<f64>,

        /// Skip the Fritsch-Carlson monotonicity correction
        #[arg(long)]
        no_monotone: bool,
    },

    /// Validate a sample file and classify query points
    Check {
        /// Path to an x,y sample file (CSV)
        #[arg(short, long)]
        samples: String,

        /// Comma-separated query points
        #[arg(long, allow_hyphen_values = true)]
        at: Option<String>,
    },

    /// Fit (a + b·x)·exp(-c·x) + d to a sample file
    Fit {
        /// Path to an x,y sample file (CSV)
        #[arg(short, long)]
        samples: String,

        /// Comma-separated starting parameters a,b,c,d
        #[arg(short, long, allow_hyphen_values = true)]
        guess: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(Path::new(&cli.config))?;
    init_tracing(if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    });
    debug!(path = %cli.config, ?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval {
            samples,
            at,
            grid,
            kind,
            format,
        } => {
            let queries = input::resolve_queries(at.as_deref(), grid.as_deref())?;
            commands::eval::run(&config, &samples, &queries, kind, format, &mut out)
        }
        Commands::Slopes {
            samples,
            method,
            tension,
            no_monotone,
        } => {
            let options = SlopeOptions {
                method,
                tension,
                no_monotone,
            };
            commands::slopes::run(&config, &samples, options, &mut out)
        }
        Commands::Check { samples, at } => {
            let queries = at.as_deref().map(input::parse_points).transpose()?;
            commands::check::run(&samples, queries.as_deref(), &mut out)
        }
        Commands::Fit {
            samples,
            guess,
            format,
        } => {
            let guess = guess.as_deref().map(input::parse_points).transpose()?;
            commands::fit::run(&config, &samples, guess, format, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from([
            "interp", "eval", "--samples", "s.csv", "--grid", "0:1:0.5", "--kind", "spline",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.config, "interp.toml");
        match cli.command {
            Commands::Eval {
                grid, kind, format, ..
            } => {
                assert_eq!(grid.as_deref(), Some("0:1:0.5"));
                assert_eq!(kind, EvalKind::Spline);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected eval"),
        }
    }

    #[test]
    fn test_at_conflicts_with_grid() {
        let result = Cli::try_parse_from([
            "interp", "eval", "-s", "s.csv", "--at", "1", "--grid", "0:1:1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_values_are_not_flags() {
        let cli = Cli::try_parse_from(["interp", "eval", "-s", "s.csv", "--at", "-2.5,-1.5"]).unwrap();
        match cli.command {
            Commands::Eval { at, .. } => assert_eq!(at.as_deref(), Some("-2.5,-1.5")),
            _ => panic!("Expected eval"),
        }

        let cli = Cli::try_parse_from(["interp", "eval", "-s", "s.csv", "--grid", "-3:-1:0.5"]).unwrap();
        match cli.command {
            Commands::Eval { grid, .. } => assert_eq!(grid.as_deref(), Some("-3:-1:0.5")),
            _ => panic!("Expected eval"),
        }

        let cli = Cli::try_parse_from(["interp", "check", "-s", "s.csv", "--at", "-4"]).unwrap();
        match cli.command {
            Commands::Check { at, .. } => assert_eq!(at.as_deref(), Some("-4")),
            _ => panic!("Expected check"),
        }

        let cli = Cli::try_parse_from([
            "interp", "fit", "-s", "s.csv", "--guess", "-1,2,0.5,0", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Fit { guess, format, .. } => {
                assert_eq!(guess.as_deref(), Some("-1,2,0.5,0"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected fit"),
        }
    }

    #[test]
    fn test_parse_slopes_method() {
        let cli = Cli::try_parse_from([
            "interp", "-v", "slopes", "-s", "s.csv", "--method", "catmull", "--no-monotone",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Slopes {
                method,
                no_monotone,
                ..
            } => {
                assert_eq!(method, Some(SlopeMethod::CatmullRom));
                assert!(no_monotone);
            }
            _ => panic!("Expected slopes"),
        }
    }

    #[test]
    fn test_unknown_slope_method_rejected() {
        let result = Cli::try_parse_from(["interp", "slopes", "-s", "s.csv", "-m", "akima"]);
        assert!(result.is_err());
    }
}
