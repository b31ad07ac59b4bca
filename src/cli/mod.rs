//! Command-line parsing for the angle distance tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the math code.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::parse_precision;
use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "angdist", version, about = "Shortest angular distance between angles (degrees)")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Decimals in text output (default: $ANGDIST_PRECISION or 6).
    #[arg(long, global = true, value_parser = precision_arg)]
    pub precision: Option<usize>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the shortest distance between two angles.
    Dist(DistArgs),
    /// Compute distances for every pair in a file (or stdin).
    Batch(BatchArgs),
    /// Tabulate distances from a reference angle across a grid.
    Sweep(SweepArgs),
    /// Check the distance properties over seeded random pairs.
    ///
    /// Exits with code 3 if any property is violated.
    Check(CheckArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct DistArgs {
    /// First angle (degrees).
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    /// Second angle (degrees).
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

/// Output options shared by `batch` and `sweep`.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write results to a file (`.json` -> JSON, otherwise CSV).
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Pairs file, one `a,b` per line (`-` for stdin).
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    /// Reference angle every grid point is measured against.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub reference: f64,

    /// First grid angle.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// Last grid angle (inclusive).
    #[arg(long, default_value_t = 360.0, allow_negative_numbers = true)]
    pub end: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 13)]
    pub steps: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct CheckArgs {
    /// Number of random pairs.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub samples: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Uniform pairs are drawn from [-span, span] degrees.
    #[arg(long, default_value_t = 1080.0)]
    pub span: f64,

    /// Fraction of pairs placed near a multiple of 360.
    #[arg(long, default_value_t = 0.25)]
    pub boundary_fraction: f64,

    /// Std dev (degrees) of boundary pairs.
    #[arg(long, default_value_t = 2.0)]
    pub boundary_sigma: f64,

    /// Base absolute tolerance, scaled by input magnitude.
    #[arg(long, default_value_t = 1e-9)]
    pub tolerance: f64,

    /// Maximum violations listed in the report.
    #[arg(long, default_value_t = 20)]
    pub max_report: usize,

    /// Write the full report as JSON.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

fn precision_arg(raw: &str) -> Result<usize, String> {
    parse_precision(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_angles() {
        let cli = Cli::try_parse_from(["angdist", "dist", "-10", "10"]).unwrap();
        match cli.command {
            Command::Dist(args) => {
                assert_eq!(args.a, -10.0);
                assert_eq!(args.b, 10.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sweep_accepts_negative_bounds() {
        let argv = ["angdist", "sweep", "--start", "-720", "--end", "720", "-r", "-90"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Sweep(args) => {
                assert_eq!(args.start, -720.0);
                assert_eq!(args.reference, -90.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let argv = ["angdist", "sweep", "--steps", "5", "-vv", "--precision", "2"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.precision, Some(2));
        match cli.command {
            Command::Sweep(args) => {
                assert_eq!(args.steps, 5);
                assert_eq!(args.output.format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn batch_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["angdist", "batch", "--format", "json"]).unwrap();
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.input, PathBuf::from("-"));
                assert_eq!(args.output.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_precision_and_verbose_with_quiet() {
        assert!(Cli::try_parse_from(["angdist", "--precision", "99", "dist", "1", "2"]).is_err());
        assert!(Cli::try_parse_from(["angdist", "-v", "-q", "dist", "1", "2"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
