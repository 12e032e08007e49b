use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::labels::Labels;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("missing field: {field}")]
    MissingField {
        field: String,
    },

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: String,
        value: String,
    },

    #[error("calculation overflow: principal {principal}, monthly rate {rate}")]
    CalculationOverflow {
        principal: Money,
        rate: Rate,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl CalculatorError {
    /// name of the offending input field, if the error came from validation
    pub fn field(&self) -> Option<&str> {
        match self {
            CalculatorError::MissingField { field } => Some(field.as_str()),
            CalculatorError::InvalidNumber { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// message to show the user in the selected language
    pub fn localized(&self, labels: &Labels) -> String {
        match self {
            CalculatorError::MissingField { .. } => labels.missing_details.to_string(),
            CalculatorError::InvalidNumber { .. } => labels.invalid_number.to_string(),
            CalculatorError::CalculationOverflow { .. } => labels.amount_too_large.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
