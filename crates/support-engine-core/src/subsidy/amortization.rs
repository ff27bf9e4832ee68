use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::subsidy::calculator::{compare_payments, CalculatorInput, CalculatorResult};
use crate::time_value::{annuity_payment, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Percent};
use crate::EngineResult;

/// One month of the schedule, before- and after-subsidy side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment_before: Money,
    pub principal_before: Money,
    pub interest_before: Money,
    pub balance_before: Money,
    pub payment_after: Money,
    pub principal_after: Money,
    pub interest_after: Money,
    pub balance_after: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub summary: CalculatorResult,
    pub rows: Vec<AmortizationRow>,
    /// Sum of the monthly interest column, before subsidy
    pub scheduled_interest_before: Money,
    /// Sum of the monthly interest column, after subsidy
    pub scheduled_interest_after: Money,
}

/// Running state of one repayment track.
struct Track {
    payment: Money,
    rate: Decimal,
    balance: Money,
    interest_paid: Money,
}

struct TrackStep {
    payment: Money,
    principal: Money,
    interest: Money,
    balance: Money,
}

impl Track {
    fn new(principal: Money, annual_rate: Percent, term_months: u32) -> EngineResult<Self> {
        Ok(Self {
            payment: annuity_payment(principal, annual_rate, term_months)?,
            rate: monthly_rate(annual_rate),
            balance: principal,
            interest_paid: Decimal::ZERO,
        })
    }

    fn step(&mut self) -> TrackStep {
        let interest = self.balance * self.rate;
        let principal = self.payment - interest;
        self.balance = (self.balance - principal).max(Decimal::ZERO);
        self.interest_paid += interest;

        TrackStep {
            payment: round_money(self.payment),
            principal: round_money(principal),
            interest: round_money(interest),
            balance: round_money(self.balance),
        }
    }
}

/// Month-by-month rows for both tracks. Assumes `input` is already validated.
fn schedule_rows(input: &CalculatorInput) -> EngineResult<(Vec<AmortizationRow>, Money, Money)> {
    let effective_rate = input.bank_rate - input.subsidy_rate;
    let mut before = Track::new(input.loan_amount, input.bank_rate, input.loan_term_months)?;
    let mut after = Track::new(input.loan_amount, effective_rate, input.loan_term_months)?;

    let rows = (1..=input.loan_term_months)
        .map(|month| {
            let b = before.step();
            let a = after.step();
            AmortizationRow {
                month,
                payment_before: b.payment,
                principal_before: b.principal,
                interest_before: b.interest,
                balance_before: b.balance,
                payment_after: a.payment,
                principal_after: a.principal,
                interest_after: a.interest,
                balance_after: a.balance,
            }
        })
        .collect();

    Ok((
        rows,
        round_money(before.interest_paid),
        round_money(after.interest_paid),
    ))
}

/// Month-by-month amortization with and without the subsidy, plus the summary.
pub fn build_amortization_schedule(
    input: &CalculatorInput,
) -> EngineResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let summary = compare_payments(input)?;
    let (rows, scheduled_interest_before, scheduled_interest_after) = schedule_rows(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity amortization schedule with interest-rate subsidy",
        &serde_json::json!({
            "interest": "opening balance * annual rate / 12 / 100",
            "principal": "fixed payment - interest",
            "balance_floor": "0",
            "months": input.loan_term_months,
        }),
        warnings,
        elapsed,
        AmortizationSchedule {
            summary,
            rows,
            scheduled_interest_before,
            scheduled_interest_after,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal_macros::dec;

    fn input() -> CalculatorInput {
        CalculatorInput {
            loan_amount: dec!(1200000),
            loan_term_months: 12,
            bank_rate: dec!(12),
            subsidy_rate: dec!(12),
        }
    }

    #[test]
    fn test_one_row_per_month() {
        let out = build_amortization_schedule(&input()).unwrap();
        let rows = &out.result.rows;
        assert_eq!(rows.len(), 12);
        assert_eq!(rows.first().unwrap().month, 1);
        assert_eq!(rows.last().unwrap().month, 12);
    }

    #[test]
    fn test_first_month_split() {
        let out = build_amortization_schedule(&input()).unwrap();
        let first = &out.result.rows[0];
        // 1% of 1,200,000
        assert_eq!(first.interest_before, dec!(12000));
        assert_eq!(
            first.principal_before,
            first.payment_before - first.interest_before
        );
        // Fully subsidised track pays no interest
        assert_eq!(first.interest_after, Decimal::ZERO);
        assert_eq!(first.payment_after, dec!(100000));
        assert_eq!(first.balance_after, dec!(1100000));
    }

    #[test]
    fn test_balances_reach_zero() {
        let out = build_amortization_schedule(&input()).unwrap();
        let last = out.result.rows.last().unwrap();
        assert_eq!(last.balance_before, Decimal::ZERO);
        assert_eq!(last.balance_after, Decimal::ZERO);
        assert!(out.result.rows.iter().all(|r| r.balance_before >= Decimal::ZERO));
    }

    #[test]
    fn test_balances_decrease_monotonically() {
        let out = build_amortization_schedule(&input()).unwrap();
        for pair in out.result.rows.windows(2) {
            assert!(pair[1].balance_before <= pair[0].balance_before);
            assert!(pair[1].interest_before <= pair[0].interest_before);
        }
    }

    #[test]
    fn test_scheduled_interest_close_to_summary() {
        let out = build_amortization_schedule(&input()).unwrap();
        let diff = out.result.scheduled_interest_before - out.result.summary.total_interest_before;
        assert!(diff.abs() < dec!(0.10), "diff {diff}");
        assert_eq!(out.result.scheduled_interest_after, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let mut i = input();
        i.loan_term_months = 0;
        assert!(matches!(
            build_amortization_schedule(&i),
            Err(EngineError::InvalidTerm { .. })
        ));
    }
}
