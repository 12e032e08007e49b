//! boundary validation of the text a user types into the calculator form
//!
//! Nothing reaches the calculation core until every field is present and
//! parses as a number. Devanagari digits are accepted, and amounts may carry
//! lakh/crore comma separators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::format::from_devanagari_digits;
use crate::interest::CalculationMethod;
use crate::period::CalendarTriple;

/// raw year/month/day text of one date card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateFields {
    pub fn new(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }
    }

    /// parse into a date, naming fields with `prefix`
    pub fn parse(&self, prefix: &str) -> Result<CalendarTriple> {
        Ok(CalendarTriple {
            year: parse_integer(&format!("{}.year", prefix), &self.year)?,
            month: parse_integer(&format!("{}.month", prefix), &self.month)?,
            day: parse_integer(&format!("{}.day", prefix), &self.day)?,
        })
    }

    fn missing(&self, prefix: &str) -> Option<String> {
        [("year", &self.year), ("month", &self.month), ("day", &self.day)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| format!("{}.{}", prefix, name))
    }
}

/// everything the calculator form collects, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub loan_date: DateFields,
    pub pay_date: DateFields,
    pub principal: String,
    pub rate: String,
    #[serde(default)]
    pub method: CalculationMethod,
}

/// validated input for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub start: CalendarTriple,
    pub end: CalendarTriple,
    pub principal: Money,
    pub monthly_rate: Rate,
    pub method: CalculationMethod,
}

impl CalculatorForm {
    /// check presence of every field, then parse the numbers
    pub fn validate(&self) -> Result<CalculationRequest> {
        if let Some(field) = self.first_missing() {
            tracing::debug!(%field, "form incomplete");
            return Err(CalculatorError::MissingField { field });
        }

        let start = self.loan_date.parse("loan_date")?;
        let end = self.pay_date.parse("pay_date")?;
        let principal = Money::from_decimal(parse_decimal("principal", &self.principal)?);
        let monthly_rate = Rate::from_percentage_decimal(parse_decimal("rate", &self.rate)?);

        Ok(CalculationRequest {
            start,
            end,
            principal,
            monthly_rate,
            method: self.method,
        })
    }

    fn first_missing(&self) -> Option<String> {
        self.loan_date
            .missing("loan_date")
            .or_else(|| self.pay_date.missing("pay_date"))
            .or_else(|| self.principal.trim().is_empty().then(|| "principal".to_string()))
            .or_else(|| self.rate.trim().is_empty().then(|| "rate".to_string()))
    }
}

impl CalculationRequest {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }
}

/// builder for requests assembled in code rather than from a form
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    start: Option<CalendarTriple>,
    end: Option<CalendarTriple>,
    principal: Option<Money>,
    monthly_rate: Option<Rate>,
    method: CalculationMethod,
}

impl RequestBuilder {
    pub fn start(mut self, date: CalendarTriple) -> Self {
        self.start = Some(date);
        self
    }

    pub fn end(mut self, date: CalendarTriple) -> Self {
        self.end = Some(date);
        self
    }

    pub fn principal(mut self, amount: Money) -> Self {
        self.principal = Some(amount);
        self
    }

    pub fn monthly_rate(mut self, rate: Rate) -> Self {
        self.monthly_rate = Some(rate);
        self
    }

    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn build(self) -> Result<CalculationRequest> {
        let missing = |field: &str| CalculatorError::MissingField {
            field: field.to_string(),
        };

        Ok(CalculationRequest {
            start: self.start.ok_or_else(|| missing("start"))?,
            end: self.end.ok_or_else(|| missing("end"))?,
            principal: self.principal.ok_or_else(|| missing("principal"))?,
            monthly_rate: self.monthly_rate.ok_or_else(|| missing("monthly_rate"))?,
            method: self.method,
        })
    }
}

fn normalize(raw: &str) -> String {
    from_devanagari_digits(raw.trim())
}

fn invalid(field: &str, raw: &str) -> CalculatorError {
    CalculatorError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    }
}

fn parse_integer(field: &str, raw: &str) -> Result<i32> {
    let text = normalize(raw);
    if text.is_empty() {
        return Err(CalculatorError::MissingField {
            field: field.to_string(),
        });
    }
    text.parse::<i32>().map_err(|_| invalid(field, raw))
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let text = normalize(raw).replace(',', "");
    if text.is_empty() {
        return Err(CalculatorError::MissingField {
            field: field.to_string(),
        });
    }
    Decimal::from_str(&text).map_err(|_| invalid(field, raw))
}
