//! CLI command implementations
//!
//! Argument definitions and the business logic for the `medir` commands,
//! extracted from main.rs for testability.

use clap::{Parser, Subcommand};

use crate::dataset::DEFAULT_SEED;
use crate::error::{MedirError, Result};
use crate::registry::REGISTRY;
use crate::runner::{BenchmarkReport, Runner};
use crate::variant::{ExternalVariant, ExternalVariantConfig};

/// Medir - micro-benchmark harness for reference kernels
///
/// Times CRC-16, quicksort, matmul and softmax over repeated warmed-up
/// trials, optionally alongside external implementations of the same
/// benchmarks.
#[derive(Parser)]
#[command(name = "medir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run one benchmark, or every registered benchmark when NAME is omitted
    ///
    /// Examples:
    ///   medir run
    ///   medir run crc16
    ///   medir run quicksort 50000
    ///   medir run matmul --external ./matmul.py
    Run {
        /// Benchmark name (crc16, quicksort, matmul, softmax)
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Input size (default size from the registry if omitted)
        #[arg(value_name = "SIZE")]
        size: Option<usize>,

        /// Override the per-benchmark timed trial count
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for deterministic dataset generation
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// External program to run as an additional variant, invoked as
        /// `PROGRAM <name> <size>`; repeatable
        #[arg(long, value_name = "PROGRAM")]
        external: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List registered benchmarks with default sizes and trial counts
    List {
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// Main CLI entrypoint - dispatches commands to handlers
///
/// # Errors
///
/// Returns any error the command handler produces; an unknown benchmark
/// name is reported as a diagnostic, not an error.
pub fn entrypoint(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            name,
            size,
            trials,
            seed,
            external,
            format,
        } => handle_run(name.as_deref(), size, trials, seed, &external, &format),
        Commands::List { format } => handle_list(&format),
    }
}

fn build_runner(seed: u64, trials: Option<usize>, external: &[String]) -> Runner {
    let mut runner = Runner::new(seed);
    if let Some(trials) = trials {
        runner = runner.with_trials(trials);
    }
    for program in external {
        runner.add_variant(Box::new(ExternalVariant::new(ExternalVariantConfig::new(
            program,
        ))));
    }
    runner
}

fn handle_run(
    name: Option<&str>,
    size: Option<usize>,
    trials: Option<usize>,
    seed: u64,
    external: &[String],
    format: &str,
) -> Result<()> {
    let runner = build_runner(seed, trials, external);

    let reports = match name {
        Some(name) => match runner.run(name, size) {
            Ok(report) => vec![report],
            Err(err @ MedirError::UnknownBenchmark { .. }) => {
                // Non-fatal: diagnostic only, nothing runs
                println!("{err}");
                return Ok(());
            }
            Err(err) => return Err(err),
        },
        None => runner.run_all(),
    };

    print_reports(&reports, format)
}

fn handle_list(format: &str) -> Result<()> {
    if format == "json" {
        let json = serde_json::to_string_pretty(&REGISTRY)
            .map_err(|e| MedirError::Report {
                reason: e.to_string(),
            })?;
        println!("{json}");
        return Ok(());
    }

    println!("{:<12} {:>12} {:>8}", "NAME", "DEFAULT SIZE", "TRIALS");
    for spec in &REGISTRY {
        println!(
            "{:<12} {:>12} {:>8}",
            spec.id.as_str(),
            spec.default_size,
            spec.trials
        );
    }
    Ok(())
}

fn print_reports(reports: &[BenchmarkReport], format: &str) -> Result<()> {
    if format == "json" {
        let json = serde_json::to_string_pretty(reports).map_err(|e| MedirError::Report {
            reason: e.to_string(),
        })?;
        println!("{json}");
        return Ok(());
    }

    for report in reports {
        println!("----- {} (size {})", report.benchmark, report.size);
        for timing in &report.timings {
            println!("  {:<24} mean {:.4} ms", timing.label, timing.mean_millis);
        }
        for failure in &report.failures {
            println!("  FAILED {failure}");
        }
    }
    Ok(())
}
