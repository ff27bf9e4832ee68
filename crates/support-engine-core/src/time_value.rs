use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::EngineError;
use crate::types::{Money, Percent};
use crate::EngineResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Monthly periodic rate for an annual percentage (20 -> 0.0166...).
pub fn monthly_rate(annual_rate: Percent) -> Decimal {
    annual_rate / MONTHS_PER_YEAR / PERCENT
}

/// Fixed monthly annuity payment, unrounded.
///
/// A zero rate degenerates to straight-line repayment `principal / term`.
/// The payment factor `r(1+r)^n / ((1+r)^n - 1)` is computed before scaling by
/// the principal, so a principal too large for the result is reported as
/// `InvalidLoanAmount`. `(1+r)^n` stays below 1e13 for rates up to 100% over
/// 360 months; it can only overflow for rates past that bound, which is
/// reported as `InvalidBankRate`.
pub fn annuity_payment(
    principal: Money,
    annual_rate: Percent,
    term_months: u32,
) -> EngineResult<Money> {
    if term_months == 0 {
        return Err(EngineError::InvalidTerm {
            months: term_months,
            max: crate::MAX_TERM_MONTHS,
        });
    }

    let periods = Decimal::from(term_months);
    if annual_rate.is_zero() {
        return Ok(principal / periods);
    }

    let rate = monthly_rate(annual_rate);
    let compound = (Decimal::ONE + rate)
        .checked_powu(u64::from(term_months))
        .ok_or(EngineError::InvalidBankRate { rate: annual_rate })?;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Ok(principal / periods);
    }

    let factor = rate * compound / denominator;
    principal
        .checked_mul(factor)
        .ok_or(EngineError::InvalidLoanAmount { amount: principal })
}
