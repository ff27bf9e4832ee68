use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EngineError;
use crate::time_value::annuity_payment;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Percent};
use crate::{EngineResult, MAX_TERM_MONTHS};

const MAX_BANK_RATE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub loan_amount: Money,
    pub loan_term_months: u32,
    /// Bank's nominal annual rate, percent
    pub bank_rate: Percent,
    /// Annual rate points covered by the subsidy, percent
    pub subsidy_rate: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub loan_amount: Money,
    pub loan_term_months: u32,
    pub bank_rate: Percent,
    pub subsidy_rate: Percent,
    /// bank_rate - subsidy_rate
    pub effective_rate: Percent,
    pub monthly_payment_before: Money,
    pub monthly_payment_after: Money,
    pub monthly_savings: Money,
    pub total_savings: Money,
    pub total_payment_before: Money,
    pub total_payment_after: Money,
    pub total_interest_before: Money,
    pub total_interest_after: Money,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Checks run in a fixed order; the first violated rule is reported.
pub fn validate_calculator_input(input: &CalculatorInput) -> EngineResult<()> {
    if input.loan_amount <= Decimal::ZERO {
        return Err(EngineError::InvalidLoanAmount {
            amount: input.loan_amount,
        });
    }
    if input.loan_term_months < 1 || input.loan_term_months > MAX_TERM_MONTHS {
        return Err(EngineError::InvalidTerm {
            months: input.loan_term_months,
            max: MAX_TERM_MONTHS,
        });
    }
    if input.bank_rate < Decimal::ZERO || input.bank_rate > MAX_BANK_RATE {
        return Err(EngineError::InvalidBankRate {
            rate: input.bank_rate,
        });
    }
    if input.subsidy_rate < Decimal::ZERO {
        return Err(EngineError::InvalidSubsidyRate {
            rate: input.subsidy_rate,
        });
    }
    if input.subsidy_rate > input.bank_rate {
        return Err(EngineError::SubsidyExceedsBankRate {
            subsidy_rate: input.subsidy_rate,
            bank_rate: input.bank_rate,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Validate and compute the before/after-subsidy comparison.
///
/// Savings and totals are derived from the rounded monthly payments so that
/// every published figure is consistent with the others to the cent.
pub fn compare_payments(input: &CalculatorInput) -> EngineResult<CalculatorResult> {
    validate_calculator_input(input)?;

    let term = Decimal::from(input.loan_term_months);
    let effective_rate = input.bank_rate - input.subsidy_rate;

    let before = round_money(annuity_payment(
        input.loan_amount,
        input.bank_rate,
        input.loan_term_months,
    )?);
    let after = round_money(annuity_payment(
        input.loan_amount,
        effective_rate,
        input.loan_term_months,
    )?);

    let monthly_savings = before - after;
    let too_large = || EngineError::InvalidLoanAmount {
        amount: input.loan_amount,
    };
    let total_payment_before = before.checked_mul(term).ok_or_else(too_large)?;
    let total_payment_after = after.checked_mul(term).ok_or_else(too_large)?;

    Ok(CalculatorResult {
        loan_amount: input.loan_amount,
        loan_term_months: input.loan_term_months,
        bank_rate: input.bank_rate,
        subsidy_rate: input.subsidy_rate,
        effective_rate: round_money(effective_rate),
        monthly_payment_before: before,
        monthly_payment_after: after,
        monthly_savings: round_money(monthly_savings),
        total_savings: round_money(total_payment_before - total_payment_after),
        total_payment_before: round_money(total_payment_before),
        total_payment_after: round_money(total_payment_after),
        total_interest_before: round_money(total_payment_before - input.loan_amount),
        total_interest_after: round_money(total_payment_after - input.loan_amount),
    })
}

/// Loan payment comparison with and without an interest-rate subsidy.
pub fn calculate_subsidy(
    input: &CalculatorInput,
) -> EngineResult<ComputationOutput<CalculatorResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let result = compare_payments(input)?;

    if input.subsidy_rate.is_zero() {
        warnings.push("Subsidy rate is 0%; payments are unchanged".into());
    }
    if result.effective_rate.is_zero() && !input.bank_rate.is_zero() {
        warnings.push("Subsidy covers the full bank rate; loan is interest-free".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity loan payment with interest-rate subsidy",
        &serde_json::json!({
            "payment_formula": "P * r * (1+r)^n / ((1+r)^n - 1), r = annual / 12 / 100",
            "zero_rate": "P / n",
            "rounding": "2 dp, half-up, savings derived from rounded payments",
        }),
        warnings,
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input() -> CalculatorInput {
        CalculatorInput {
            loan_amount: dec!(10000000),
            loan_term_months: 12,
            bank_rate: dec!(20),
            subsidy_rate: dec!(8),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let r = compare_payments(&input()).unwrap();
        assert_eq!(r.effective_rate, dec!(12.00));
        // 20% over 12 months: 926,345.06; 12%: 888,487.89
        assert!((r.monthly_payment_before - dec!(926345.06)).abs() <= dec!(0.01));
        assert!((r.monthly_payment_after - dec!(888487.89)).abs() <= dec!(0.01));
        assert_eq!(r.monthly_savings, r.monthly_payment_before - r.monthly_payment_after);
        assert_eq!(r.total_savings, r.monthly_savings * dec!(12));
    }

    #[test]
    fn test_totals_and_interest() {
        let r = compare_payments(&input()).unwrap();
        assert_eq!(r.total_payment_before, r.monthly_payment_before * dec!(12));
        assert_eq!(r.total_interest_before, r.total_payment_before - dec!(10000000));
        assert_eq!(r.total_interest_after, r.total_payment_after - dec!(10000000));
        assert_eq!(
            r.total_savings,
            r.total_payment_before - r.total_payment_after
        );
    }

    #[test]
    fn test_zero_subsidy() {
        let mut i = input();
        i.subsidy_rate = Decimal::ZERO;
        let r = compare_payments(&i).unwrap();
        assert_eq!(r.effective_rate, r.bank_rate);
        assert_eq!(r.monthly_payment_before, r.monthly_payment_after);
        assert_eq!(r.total_savings, Decimal::ZERO);
    }

    #[test]
    fn test_full_subsidy_is_interest_free() {
        let mut i = input();
        i.subsidy_rate = i.bank_rate;
        let r = compare_payments(&i).unwrap();
        assert_eq!(r.effective_rate, Decimal::ZERO);
        assert_eq!(r.monthly_payment_after, round_money(dec!(10000000) / dec!(12)));
        assert!(r.total_interest_after.abs() < dec!(1));
    }

    #[test]
    fn test_validation_order() {
        // Every field invalid: amount is reported first
        let bad = CalculatorInput {
            loan_amount: Decimal::ZERO,
            loan_term_months: 0,
            bank_rate: dec!(-1),
            subsidy_rate: dec!(-1),
        };
        assert!(matches!(
            compare_payments(&bad),
            Err(EngineError::InvalidLoanAmount { .. })
        ));

        let bad = CalculatorInput {
            loan_amount: dec!(1),
            ..bad
        };
        assert!(matches!(
            compare_payments(&bad),
            Err(EngineError::InvalidTerm { months: 0, .. })
        ));

        let bad = CalculatorInput {
            loan_term_months: 12,
            ..bad
        };
        assert!(matches!(
            compare_payments(&bad),
            Err(EngineError::InvalidBankRate { .. })
        ));

        let bad = CalculatorInput {
            bank_rate: dec!(10),
            ..bad
        };
        assert!(matches!(
            compare_payments(&bad),
            Err(EngineError::InvalidSubsidyRate { .. })
        ));

        let bad = CalculatorInput {
            subsidy_rate: dec!(11),
            ..bad
        };
        assert!(matches!(
            compare_payments(&bad),
            Err(EngineError::SubsidyExceedsBankRate { .. })
        ));
    }

    #[test]
    fn test_rate_and_term_boundaries_accepted() {
        let ok = CalculatorInput {
            loan_amount: dec!(1000),
            loan_term_months: 360,
            bank_rate: dec!(100),
            subsidy_rate: dec!(100),
        };
        assert!(compare_payments(&ok).is_ok());

        let too_long = CalculatorInput {
            loan_term_months: 361,
            ..ok
        };
        assert!(matches!(
            compare_payments(&too_long),
            Err(EngineError::InvalidTerm { months: 361, .. })
        ));
    }

    #[test]
    fn test_envelope_warnings() {
        let mut i = input();
        i.subsidy_rate = Decimal::ZERO;
        let out = calculate_subsidy(&i).unwrap();
        assert_eq!(out.warnings.len(), 1);

        i.subsidy_rate = i.bank_rate;
        let out = calculate_subsidy(&i).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("interest-free"));
    }
}
