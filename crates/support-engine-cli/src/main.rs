mod commands;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;

use support_engine_core::EngineError;

use commands::matching::{MatchArgs, WeightsArgs};
use commands::subsidy::{ProgramSubsidyArgs, SubsidyArgs};

/// Support-program matching and loan subsidy calculations
#[derive(Parser)]
#[command(
    name = "gsp",
    version,
    about = "Support-program matching and loan subsidy calculations",
    long_about = "Ranks government support programs for a business profile with \
                  explainable scores, and computes annuity loan payments with and \
                  without an interest-rate subsidy, including amortization schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter (e.g. "debug"); defaults to RUST_LOG, then "warn"
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank support programs for a business profile
    Match(MatchArgs),
    /// Compare loan payments with and without a rate subsidy
    Subsidy(SubsidyArgs),
    /// Subsidy calculation within a program's rates and limits
    ProgramSubsidy(ProgramSubsidyArgs),
    /// Month-by-month amortization with and without the subsidy
    Schedule(SubsidyArgs),
    /// Print the scoring weights
    Weights(WeightsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn log_warnings(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        for w in warnings.iter().filter_map(Value::as_str) {
            tracing::warn!("{w}");
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.log_level.as_deref()) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(2);
    }

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Match(args) => commands::matching::run_match(args),
        Commands::Subsidy(args) => commands::subsidy::run_subsidy(args),
        Commands::ProgramSubsidy(args) => commands::subsidy::run_program_subsidy(args),
        Commands::Schedule(args) => commands::subsidy::run_schedule(args),
        Commands::Weights(args) => commands::matching::run_weights(args),
        Commands::Version => {
            println!("gsp {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            log_warnings(&value);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            match e.downcast_ref::<EngineError>() {
                Some(engine_err) => {
                    tracing::debug!(code = engine_err.code(), "engine rejected input");
                    eprintln!(
                        "{} [{}]: {}",
                        "error".red().bold(),
                        engine_err.code(),
                        engine_err
                    );
                }
                None => eprintln!("{}: {}", "error".red().bold(), e),
            }
            process::exit(1);
        }
    }
}
