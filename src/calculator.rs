use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::input::{CalculationRequest, CalculatorForm};
use crate::interest::calculate_interest;
use crate::period::TimeBreakdown;
use crate::report::CalculationReport;

/// stateless front door: breakdown, then interest
///
/// Holds only presentation configuration. Each call receives its own
/// request and shares nothing with any other call.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pub config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// run a validated request
    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationReport> {
        let breakdown = TimeBreakdown::between(request.start, request.end);
        if !breakdown.is_consistent() {
            tracing::warn!(
                start = %request.start,
                end = %request.end,
                "end date precedes start date, breakdown clamped at zero"
            );
        }
        tracing::debug!(
            years = breakdown.years,
            months = breakdown.months,
            days = breakdown.days,
            total_months = %breakdown.total_decimal_months,
            "time breakdown"
        );

        let result = calculate_interest(
            request.principal,
            request.monthly_rate,
            &breakdown,
            request.method,
        )?;

        Ok(CalculationReport {
            request: *request,
            breakdown,
            result,
        })
    }

    /// validate raw form text, then calculate
    pub fn calculate_form(&self, form: &CalculatorForm) -> Result<CalculationReport> {
        let request = form.validate()?;
        self.calculate(&request)
    }

    /// rendered summary, or the localized error message
    pub fn summary(&self, form: &CalculatorForm) -> std::result::Result<String, String> {
        self.calculate_form(form)
            .map(|report| report.render(&self.config))
            .map_err(|e| e.localized(self.config.labels()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::errors::CalculatorError;
    use crate::input::DateFields;
    use crate::interest::CalculationMethod;
    use crate::period::CalendarTriple;
    use rust_decimal_macros::dec;

    fn request(method: CalculationMethod) -> CalculationRequest {
        CalculationRequest::builder()
            .start(CalendarTriple::new(2080, 1, 1))
            .end(CalendarTriple::new(2081, 1, 1))
            .principal(Money::from_major(100_000))
            .monthly_rate(Rate::from_percentage(2))
            .method(method)
            .build()
            .unwrap()
    }

    #[test]
    fn test_calculate_nepali() {
        let report = Calculator::default()
            .calculate(&request(CalculationMethod::Nepali))
            .unwrap();

        assert_eq!(report.breakdown.years, 1);
        assert_eq!(report.result.total_months, dec!(12));
        assert_eq!(report.result.total_amount, Money::from_major(124_000));
    }

    #[test]
    fn test_calculate_is_repeatable() {
        let calculator = Calculator::default();
        let req = request(CalculationMethod::Standard);

        let first = calculator.calculate(&req).unwrap();
        let second = calculator.calculate(&req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_standard_exceeds_nepali_over_one_year() {
        let calculator = Calculator::default();
        let nepali = calculator.calculate(&request(CalculationMethod::Nepali)).unwrap();
        let standard = calculator.calculate(&request(CalculationMethod::Standard)).unwrap();

        // monthly compounding beats twelve months of simple interest
        assert!(standard.result.total_amount > nepali.result.total_amount);
    }

    #[test]
    fn test_calculate_form_errors() {
        let form = CalculatorForm {
            loan_date: DateFields::new("2080", "1", "1"),
            pay_date: DateFields::new("2081", "", "1"),
            principal: "1000".to_string(),
            rate: "2".to_string(),
            method: CalculationMethod::Nepali,
        };

        let err = Calculator::default().calculate_form(&form).unwrap_err();
        assert_eq!(err, CalculatorError::MissingField { field: "pay_date.month".to_string() });

        let message = Calculator::new(CalculatorConfig::english()).summary(&form).unwrap_err();
        assert_eq!(message, "Please fill all details.");
    }

    #[test]
    fn test_largest_principal_renders() {
        let form = CalculatorForm {
            loan_date: DateFields::new("2080", "1", "1"),
            pay_date: DateFields::new("2081", "1", "1"),
            principal: "79228162514264337593543950335".to_string(),
            rate: "0".to_string(),
            method: CalculationMethod::Nepali,
        };

        let text = Calculator::new(CalculatorConfig::english()).summary(&form).unwrap();
        assert!(text.contains("Principal: Rs. 79,22,81,62,51,42,64,33,75,93,54,39,50,335"));
        assert!(text.contains("TOTAL INTEREST: Rs. 0"));
    }

    #[test]
    fn test_mistyped_year_reports_localized_overflow() {
        let form = CalculatorForm {
            loan_date: DateFields::new("280", "1", "1"),
            pay_date: DateFields::new("2081", "1", "1"),
            principal: "1000".to_string(),
            rate: "2".to_string(),
            method: CalculationMethod::Nepali,
        };

        let err = Calculator::default().calculate_form(&form).unwrap_err();
        assert!(matches!(err, CalculatorError::CalculationOverflow { .. }));

        let message = Calculator::default().summary(&form).unwrap_err();
        assert_eq!(message, "रकम धेरै ठूलो भयो, कृपया मिति र ब्याज दर जाँच्नुहोला।");
    }

    #[test]
    fn test_end_before_start_still_calculates() {
        let req = CalculationRequest::builder()
            .start(CalendarTriple::new(2081, 1, 1))
            .end(CalendarTriple::new(2080, 1, 1))
            .principal(Money::from_major(1_000))
            .monthly_rate(Rate::from_percentage(2))
            .method(CalculationMethod::Standard)
            .build()
            .unwrap();

        let report = Calculator::default().calculate(&req).unwrap();
        assert!(report.breakdown.is_zero());
        assert_eq!(report.result.total_amount, Money::from_major(1_000));
        assert!(report.result.total_interest.is_zero());
    }
}
