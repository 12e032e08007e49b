use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::{CalculationMethod, InterestCalculator};
use crate::period::TimeBreakdown;

/// standard monthly compounding, A = P(1 + r)^n
///
/// `n` is the fractional month count, so a partial month compounds as a real
/// exponent rather than period by period.
pub struct MonthlyCompoundingEngine;

impl MonthlyCompoundingEngine {
    /// growth factor (1 + r)^months
    pub fn growth_factor(&self, monthly_rate: Rate, months: Decimal) -> Option<Decimal> {
        let base = Decimal::ONE.checked_add(monthly_rate.as_decimal())?;
        base.checked_powd(months)
    }
}

impl InterestCalculator for MonthlyCompoundingEngine {
    fn final_amount(
        &self,
        principal: Money,
        monthly_rate: Rate,
        time: &TimeBreakdown,
    ) -> Result<Money> {
        let final_amount = self
            .growth_factor(monthly_rate, time.total_decimal_months)
            .and_then(|factor| principal.as_decimal().checked_mul(factor))
            .ok_or_else(|| {
                tracing::warn!(
                    %principal,
                    %monthly_rate,
                    months = %time.total_decimal_months,
                    "monthly compounding overflowed"
                );
                CalculatorError::CalculationOverflow {
                    principal,
                    rate: monthly_rate,
                }
            })?;

        Ok(Money::from_decimal(final_amount))
    }

    fn method(&self) -> CalculationMethod {
        CalculationMethod::Standard
    }
}
