pub mod monthly;
pub mod yearly;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::labels::Labels;
use crate::period::TimeBreakdown;

pub use monthly::MonthlyCompoundingEngine;
pub use yearly::YearlyCompoundingEngine;

/// which compounding convention to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// compound yearly, simple interest for the partial year
    #[default]
    Nepali,
    /// compound monthly over fractional months
    Standard,
}

impl CalculationMethod {
    /// engine implementing this method
    pub fn calculator(&self) -> Box<dyn InterestCalculator> {
        match self {
            CalculationMethod::Nepali => Box::new(YearlyCompoundingEngine),
            CalculationMethod::Standard => Box::new(MonthlyCompoundingEngine),
        }
    }

    pub fn label(&self, labels: &Labels) -> &'static str {
        match self {
            CalculationMethod::Nepali => labels.method_nepali,
            CalculationMethod::Standard => labels.method_standard,
        }
    }
}

/// interest calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_months: Decimal,
    pub total_interest: Money,
    pub total_amount: Money,
}

/// trait for the compounding conventions
pub trait InterestCalculator {
    /// principal plus interest at the end of `time`
    fn final_amount(
        &self,
        principal: Money,
        monthly_rate: Rate,
        time: &TimeBreakdown,
    ) -> Result<Money>;

    fn method(&self) -> CalculationMethod;
}

/// calculate interest on `principal` at `monthly_rate` over `time`
///
/// A non-positive principal or a negative rate skips growth entirely: the
/// principal comes back unchanged with zero interest.
pub fn calculate_interest(
    principal: Money,
    monthly_rate: Rate,
    time: &TimeBreakdown,
    method: CalculationMethod,
) -> Result<CalculationResult> {
    if !principal.is_positive() || monthly_rate.is_negative() {
        tracing::debug!(%principal, %monthly_rate, "no growth applied");
        return Ok(CalculationResult {
            total_months: time.total_decimal_months,
            total_interest: Money::ZERO,
            total_amount: principal,
        });
    }

    let final_amount = method.calculator().final_amount(principal, monthly_rate, time)?;
    let result = CalculationResult {
        total_months: time.total_decimal_months,
        total_interest: final_amount - principal,
        total_amount: final_amount,
    };

    tracing::debug!(
        ?method,
        total_interest = %result.total_interest,
        total_amount = %result.total_amount,
        "interest calculated"
    );
    Ok(result)
}
