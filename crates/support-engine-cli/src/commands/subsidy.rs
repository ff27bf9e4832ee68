use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use support_engine_core::subsidy::{
    build_amortization_schedule, calculate_subsidy, calculate_with_program, CalculatorInput,
    ProgramCalculatorInput,
};

use crate::input;

/// Arguments for the bare subsidy calculator and the amortization schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SubsidyArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Loan term in months (1-360)
    #[arg(long, alias = "term")]
    pub loan_term_months: Option<u32>,

    /// Bank's annual rate, percent
    #[arg(long)]
    pub bank_rate: Option<Decimal>,

    /// Subsidised annual rate points, percent
    #[arg(long)]
    pub subsidy_rate: Option<Decimal>,
}

/// Arguments for the program-bound calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ProgramSubsidyArgs {
    /// Path to JSON/YAML file with `program`, `loan_amount`, `loan_term_months`
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal (overrides the file)
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Loan term in months (overrides the file)
    #[arg(long, alias = "term")]
    pub loan_term_months: Option<u32>,

    /// Override the program's bank rate, percent
    #[arg(long)]
    pub bank_rate: Option<Decimal>,

    /// Override the program's subsidy rate, percent
    #[arg(long)]
    pub subsidy_rate: Option<Decimal>,
}

fn calculator_input(args: &SubsidyArgs) -> Result<CalculatorInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }
    if let Some(piped) = input::stdin::read_stdin()? {
        return Ok(piped);
    }
    Ok(CalculatorInput {
        loan_amount: args
            .loan_amount
            .ok_or("--loan-amount is required (or provide --input)")?,
        loan_term_months: args
            .loan_term_months
            .ok_or("--loan-term-months is required (or provide --input)")?,
        bank_rate: args
            .bank_rate
            .ok_or("--bank-rate is required (or provide --input)")?,
        subsidy_rate: args
            .subsidy_rate
            .ok_or("--subsidy-rate is required (or provide --input)")?,
    })
}

pub fn run_subsidy(args: SubsidyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let calc_input = calculator_input(&args)?;
    tracing::info!(term = calc_input.loan_term_months, "calculating subsidy");
    let result = calculate_subsidy(&calc_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: SubsidyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let calc_input = calculator_input(&args)?;
    tracing::info!(term = calc_input.loan_term_months, "building amortization schedule");
    let result = build_amortization_schedule(&calc_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_program_subsidy(args: ProgramSubsidyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut data: Value = if let Some(ref path) = args.input {
        input::file::read_input_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input file with program metadata is required".into());
    };

    // Flags take precedence over the file
    if let Value::Object(ref mut map) = data {
        if let Some(amount) = args.loan_amount {
            map.insert("loan_amount".into(), serde_json::to_value(amount)?);
        }
        if let Some(term) = args.loan_term_months {
            map.insert("loan_term_months".into(), Value::from(term));
        }
        if let Some(rate) = args.bank_rate {
            map.insert("bank_rate".into(), serde_json::to_value(rate)?);
        }
        if let Some(rate) = args.subsidy_rate {
            map.insert("subsidy_rate".into(), serde_json::to_value(rate)?);
        }
    }

    let program_input: ProgramCalculatorInput = serde_json::from_value(data)?;
    tracing::info!(
        program = %program_input.program.title,
        term = program_input.loan_term_months,
        "calculating program subsidy"
    );
    let result = calculate_with_program(&program_input)?;
    Ok(serde_json::to_value(result)?)
}
