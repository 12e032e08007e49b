pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod input;
pub mod interest;
pub mod labels;
pub mod period;
pub mod report;

// re-export key types
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use format::{format_amount, from_devanagari_digits, to_devanagari_digits};
pub use input::{CalculationRequest, CalculatorForm, DateFields, RequestBuilder};
pub use interest::{
    calculate_interest, CalculationMethod, CalculationResult, InterestCalculator,
    MonthlyCompoundingEngine, YearlyCompoundingEngine,
};
pub use labels::{Labels, Language};
pub use period::{CalendarTriple, TimeBreakdown};
pub use report::CalculationReport;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
