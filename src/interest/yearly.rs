use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::{CalculationMethod, InterestCalculator};
use crate::period::TimeBreakdown;

/// nepali style: compound yearly at twelve times the monthly rate, then
/// simple interest at the monthly rate for the leftover months and days
pub struct YearlyCompoundingEngine;

impl YearlyCompoundingEngine {
    /// amount after compounding over the whole years only
    pub fn amount_after_years(
        &self,
        principal: Money,
        monthly_rate: Rate,
        years: u32,
    ) -> Option<Decimal> {
        let base = Decimal::ONE.checked_add(monthly_rate.annualized().as_decimal())?;
        let factor = base.checked_powu(u64::from(years))?;
        principal.as_decimal().checked_mul(factor)
    }
}

impl InterestCalculator for YearlyCompoundingEngine {
    fn final_amount(
        &self,
        principal: Money,
        monthly_rate: Rate,
        time: &TimeBreakdown,
    ) -> Result<Money> {
        let final_amount = self
            .amount_after_years(principal, monthly_rate, time.years)
            .and_then(|after_years| {
                let simple = monthly_rate
                    .as_decimal()
                    .checked_mul(time.remaining_months())?;
                after_years.checked_mul(Decimal::ONE.checked_add(simple)?)
            })
            .ok_or_else(|| {
                tracing::warn!(
                    %principal,
                    %monthly_rate,
                    years = time.years,
                    "yearly compounding overflowed"
                );
                CalculatorError::CalculationOverflow {
                    principal,
                    rate: monthly_rate,
                }
            })?;

        Ok(Money::from_decimal(final_amount))
    }

    fn method(&self) -> CalculationMethod {
        CalculationMethod::Nepali
    }
}
