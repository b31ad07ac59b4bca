//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and environment settings
//! - initializes logging
//! - dispatches to the batch / sweep / check pipelines
//! - prints results and writes optional exports

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{BatchArgs, CheckArgs, Cli, Command, DistArgs, GlobalArgs, OutputArgs, SweepArgs};
use crate::config::{EnvSettings, resolve_precision};
use crate::domain::{RunConfig, SampleConfig};
use crate::error::{AppError, EXIT_VIOLATION};

pub mod pipeline;

/// Entry point for the `angdist` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let env = EnvSettings::from_env()?;
    init_logging(&cli.global, &env)?;
    debug!(?cli, "parsed arguments");

    let precision = resolve_precision(cli.global.precision, &env);
    match cli.command {
        Command::Dist(args) => handle_dist(args, precision),
        Command::Batch(args) => handle_batch(args, precision),
        Command::Sweep(args) => handle_sweep(args, precision),
        Command::Check(args) => handle_check(args, precision),
    }
}

fn handle_dist(args: DistArgs, precision: usize) -> Result<(), AppError> {
    let d = pipeline::run_dist(args.a, args.b)?;
    println!("{}", crate::report::format_distance(d, precision));
    Ok(())
}

fn handle_batch(args: BatchArgs, precision: usize) -> Result<(), AppError> {
    let config = run_config_from_output(&args.output, precision);
    let records = pipeline::run_batch(&args.input)?;
    if records.is_empty() {
        warn!(input = %args.input.display(), "no angle pairs found");
    }
    emit_records(&records, &config)
}

fn handle_sweep(args: SweepArgs, precision: usize) -> Result<(), AppError> {
    let config = run_config_from_output(&args.output, precision);
    let records = pipeline::run_sweep(args.reference, args.start, args.end, args.steps)?;
    emit_records(&records, &config)
}

fn handle_check(args: CheckArgs, precision: usize) -> Result<(), AppError> {
    let config = run_config_from_check(&args, precision);
    let report = pipeline::run_check(&config)?;

    println!("{}", crate::report::format_check_report(&report, config.max_report));
    if let Some(path) = &config.export {
        crate::io::export::write_check_report(path, &report)?;
    }

    if report.passed() {
        Ok(())
    } else {
        Err(AppError::new(
            EXIT_VIOLATION,
            format!("Property check failed: {} violations.", report.violations.len()),
        ))
    }
}

fn emit_records(
    records: &[crate::domain::DistanceRecord],
    config: &RunConfig,
) -> Result<(), AppError> {
    let body = crate::report::format_records(records, config.format, config.precision)?;
    print!("{body}");
    if !body.ends_with('\n') {
        println!();
    }
    if let Some(path) = &config.export {
        crate::io::export::write_records(path, records)?;
    }
    Ok(())
}

pub fn run_config_from_output(args: &OutputArgs, precision: usize) -> RunConfig {
    RunConfig {
        format: args.format,
        precision,
        export: args.export.clone(),
        ..RunConfig::default()
    }
}

pub fn run_config_from_check(args: &CheckArgs, precision: usize) -> RunConfig {
    RunConfig {
        precision,
        export: args.export.clone(),
        sample: SampleConfig {
            sample_count: args.samples,
            seed: args.seed,
            span: args.span,
            boundary_fraction: args.boundary_fraction,
            boundary_sigma: args.boundary_sigma,
        },
        tolerance: args.tolerance,
        max_report: args.max_report,
        ..RunConfig::default()
    }
}

/// Pick the log filter: `-q`/`-v` flags win, then `ANGDIST_LOG`, then `warn`.
fn log_directive(global: &GlobalArgs, env: &EnvSettings) -> String {
    if global.quiet {
        return "error".to_string();
    }
    match global.verbose {
        0 => env.log_filter.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn init_logging(global: &GlobalArgs, env: &EnvSettings) -> Result<(), AppError> {
    let directive = log_directive(global, env);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::input(format!("Invalid log filter '{directive}': {e}")))?;

    // Logs go to stderr; stdout carries tables/CSV/JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            precision: None,
            verbose,
            quiet,
        }
    }

    #[test]
    fn log_directive_precedence() {
        let env = EnvSettings {
            precision: None,
            log_filter: Some("angdist=trace".to_string()),
        };
        assert_eq!(log_directive(&global(0, false), &env), "angdist=trace");
        assert_eq!(log_directive(&global(1, false), &env), "info");
        assert_eq!(log_directive(&global(3, false), &env), "debug");
        assert_eq!(log_directive(&global(0, true), &env), "error");
        assert_eq!(log_directive(&global(0, false), &EnvSettings::default()), "warn");
    }

    #[test]
    fn check_config_carries_sampling_args() {
        let argv = ["angdist", "check", "-n", "12", "--seed", "7", "--span", "90"];
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        let config = run_config_from_check(&args, 3);
        assert_eq!(config.sample.sample_count, 12);
        assert_eq!(config.sample.seed, 7);
        assert_eq!(config.sample.span, 90.0);
        assert_eq!(config.precision, 3);
    }
}
