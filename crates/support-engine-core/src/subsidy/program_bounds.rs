use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EngineError;
use crate::subsidy::calculator::{compare_payments, CalculatorInput, CalculatorResult};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, ProgramRecord};
use crate::EngineResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Calculator-relevant slice of a program record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramCalculatorMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_loan_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loan_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsidy_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loan_term_months: Option<u32>,
    #[serde(default)]
    pub calculator_enabled: bool,
}

impl From<&ProgramRecord> for ProgramCalculatorMeta {
    fn from(program: &ProgramRecord) -> Self {
        Self {
            id: program.id.clone(),
            title: program.title.clone(),
            min_loan_amount: program.min_loan_amount,
            max_loan_amount: program.max_loan_amount,
            bank_rate: program.bank_rate,
            subsidy_rate: program.subsidy_rate,
            max_loan_term_months: program.max_loan_term_months,
            calculator_enabled: program.calculator_enabled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramCalculatorInput {
    pub program: ProgramCalculatorMeta,
    pub loan_amount: Money,
    pub loan_term_months: u32,
    /// Overrides the program's bank rate when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_rate: Option<Percent>,
    /// Overrides the program's subsidy rate when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsidy_rate: Option<Percent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Program,
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRates {
    pub bank_rate: Percent,
    pub subsidy_rate: Percent,
    pub bank_rate_source: RateSource,
    pub subsidy_rate_source: RateSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramCalculation {
    pub program: ProgramCalculatorMeta,
    pub rates: ResolvedRates,
    pub calculation: CalculatorResult,
}

// ---------------------------------------------------------------------------
// Rate resolution and bound checks
// ---------------------------------------------------------------------------

fn pick(override_rate: Option<Percent>, program_rate: Option<Percent>) -> Option<(Percent, RateSource)> {
    override_rate
        .map(|r| (r, RateSource::Override))
        .or_else(|| program_rate.map(|r| (r, RateSource::Program)))
}

/// Override rate if supplied, otherwise the program default.
pub fn resolve_rates(
    program: &ProgramCalculatorMeta,
    bank_override: Option<Percent>,
    subsidy_override: Option<Percent>,
) -> EngineResult<ResolvedRates> {
    let bank = pick(bank_override, program.bank_rate);
    let subsidy = pick(subsidy_override, program.subsidy_rate);

    match (bank, subsidy) {
        (Some((bank_rate, bank_rate_source)), Some((subsidy_rate, subsidy_rate_source))) => {
            Ok(ResolvedRates {
                bank_rate,
                subsidy_rate,
                bank_rate_source,
                subsidy_rate_source,
            })
        }
        (None, None) => Err(EngineError::MissingProgramRates {
            missing: "bank_rate and subsidy_rate".into(),
        }),
        (None, Some(_)) => Err(EngineError::MissingProgramRates {
            missing: "bank_rate".into(),
        }),
        (Some(_), None) => Err(EngineError::MissingProgramRates {
            missing: "subsidy_rate".into(),
        }),
    }
}

/// Program limits, checked in order: minimum amount, maximum amount, maximum term.
pub fn check_program_bounds(
    program: &ProgramCalculatorMeta,
    loan_amount: Money,
    loan_term_months: u32,
) -> EngineResult<()> {
    if let Some(minimum) = program.min_loan_amount {
        if loan_amount < minimum {
            return Err(EngineError::BelowMinimumLoanAmount {
                amount: loan_amount,
                minimum,
            });
        }
    }
    if let Some(maximum) = program.max_loan_amount {
        if loan_amount > maximum {
            return Err(EngineError::AboveMaximumLoanAmount {
                amount: loan_amount,
                maximum,
            });
        }
    }
    if let Some(maximum) = program.max_loan_term_months {
        if loan_term_months > maximum {
            return Err(EngineError::TermExceedsMaximum {
                months: loan_term_months,
                maximum,
            });
        }
    }
    Ok(())
}

/// Subsidy calculation constrained by a specific program's rates and limits.
pub fn calculate_with_program(
    input: &ProgramCalculatorInput,
) -> EngineResult<ComputationOutput<ProgramCalculation>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let rates = resolve_rates(&input.program, input.bank_rate, input.subsidy_rate)?;
    check_program_bounds(&input.program, input.loan_amount, input.loan_term_months)?;

    let calculation = compare_payments(&CalculatorInput {
        loan_amount: input.loan_amount,
        loan_term_months: input.loan_term_months,
        bank_rate: rates.bank_rate,
        subsidy_rate: rates.subsidy_rate,
    })?;

    if !input.program.calculator_enabled {
        warnings.push(format!(
            "Calculator is not enabled for program '{}'",
            input.program.title
        ));
    }
    if rates.bank_rate_source == RateSource::Override {
        warnings.push("Bank rate overridden by caller".into());
    }
    if rates.subsidy_rate_source == RateSource::Override {
        warnings.push("Subsidy rate overridden by caller".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "program": input.program.title,
        "min_loan_amount": input.program.min_loan_amount.map(|v| v.to_string()),
        "max_loan_amount": input.program.max_loan_amount.map(|v| v.to_string()),
        "max_loan_term_months": input.program.max_loan_term_months,
    });

    Ok(with_metadata(
        "Program-bound annuity subsidy calculation",
        &assumptions,
        warnings,
        elapsed,
        ProgramCalculation {
            program: input.program.clone(),
            rates,
            calculation,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn program() -> ProgramCalculatorMeta {
        ProgramCalculatorMeta {
            id: Some("damu-1".into()),
            title: "Субсидирование ставки".into(),
            min_loan_amount: Some(dec!(1000000)),
            max_loan_amount: Some(dec!(50000000)),
            bank_rate: Some(dec!(20)),
            subsidy_rate: Some(dec!(8)),
            max_loan_term_months: Some(60),
            calculator_enabled: true,
        }
    }

    fn input(amount: Money, term: u32) -> ProgramCalculatorInput {
        ProgramCalculatorInput {
            program: program(),
            loan_amount: amount,
            loan_term_months: term,
            bank_rate: None,
            subsidy_rate: None,
        }
    }

    #[test]
    fn test_uses_program_rates() {
        let out = calculate_with_program(&input(dec!(10000000), 12)).unwrap();
        assert_eq!(out.result.calculation.effective_rate, dec!(12));
        assert_eq!(out.result.rates.bank_rate_source, RateSource::Program);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut i = input(dec!(10000000), 12);
        i.subsidy_rate = Some(dec!(10));
        let out = calculate_with_program(&i).unwrap();
        assert_eq!(out.result.calculation.effective_rate, dec!(10));
        assert_eq!(out.result.rates.subsidy_rate_source, RateSource::Override);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_missing_rates() {
        let mut i = input(dec!(10000000), 12);
        i.program.bank_rate = None;
        let err = calculate_with_program(&i).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingProgramRates {
                missing: "bank_rate".into()
            }
        );

        i.bank_rate = Some(dec!(18));
        assert!(calculate_with_program(&i).is_ok());
    }

    #[test]
    fn test_bounds_in_order() {
        let err = calculate_with_program(&input(dec!(999999), 120)).unwrap_err();
        assert!(matches!(err, EngineError::BelowMinimumLoanAmount { .. }));
        assert!(err.to_string().contains("1000000"));

        let err = calculate_with_program(&input(dec!(50000001), 120)).unwrap_err();
        assert!(matches!(err, EngineError::AboveMaximumLoanAmount { .. }));
        assert!(err.to_string().contains("50000000"));

        let err = calculate_with_program(&input(dec!(5000000), 61)).unwrap_err();
        assert_eq!(
            err,
            EngineError::TermExceedsMaximum {
                months: 61,
                maximum: 60
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(calculate_with_program(&input(dec!(1000000), 60)).is_ok());
        assert!(calculate_with_program(&input(dec!(50000000), 60)).is_ok());
    }

    #[test]
    fn test_rates_checked_before_bounds() {
        let mut i = input(dec!(1), 600);
        i.program.subsidy_rate = None;
        assert!(matches!(
            calculate_with_program(&i),
            Err(EngineError::MissingProgramRates { .. })
        ));
    }

    #[test]
    fn test_calculator_validation_after_bounds() {
        let mut i = input(dec!(5000000), 12);
        i.subsidy_rate = Some(dec!(25));
        assert!(matches!(
            calculate_with_program(&i),
            Err(EngineError::SubsidyExceedsBankRate { .. })
        ));
    }

    #[test]
    fn test_disabled_calculator_warns() {
        let mut i = input(dec!(5000000), 12);
        i.program.calculator_enabled = false;
        let out = calculate_with_program(&i).unwrap();
        assert!(out.warnings[0].contains("not enabled"));
    }

    #[test]
    fn test_meta_from_record() {
        let record = ProgramRecord {
            title: "x".into(),
            bank_rate: Some(dec!(15)),
            max_loan_term_months: Some(36),
            calculator_enabled: true,
            ..Default::default()
        };
        let meta = ProgramCalculatorMeta::from(&record);
        assert_eq!(meta.bank_rate, Some(dec!(15)));
        assert_eq!(meta.max_loan_term_months, Some(36));
        assert!(meta.subsidy_rate.is_none());
    }
}
