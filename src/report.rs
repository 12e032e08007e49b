//! serializable and printable views of a finished calculation
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::format::to_devanagari_digits;
use crate::input::CalculationRequest;
use crate::interest::CalculationResult;
use crate::period::TimeBreakdown;

/// everything produced by one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub request: CalculationRequest,
    pub breakdown: TimeBreakdown,
    pub result: CalculationResult,
}

impl CalculationReport {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// amount with currency symbol in lakh grouping
    pub fn display_amount(&self, amount: Money, config: &CalculatorConfig) -> String {
        localize_digits(
            &format!("{} {}", config.currency_symbol, amount.to_lakh_string()),
            config,
        )
    }

    /// e.g. "1 Year 3 Month 15 Day"
    pub fn display_time_period(&self, config: &CalculatorConfig) -> String {
        let labels = config.labels();
        localize_digits(
            &format!(
                "{} {} {} {} {} {}",
                self.breakdown.years,
                labels.year,
                self.breakdown.months,
                labels.month,
                self.breakdown.days,
                labels.day
            ),
            config,
        )
    }

    /// plain text summary in the configured language
    pub fn render(&self, config: &CalculatorConfig) -> String {
        self.localized(config).to_string()
    }

    /// display wrapper pairing the report with a configuration
    pub fn localized<'a>(&'a self, config: &'a CalculatorConfig) -> LocalizedReport<'a> {
        LocalizedReport {
            report: self,
            config,
        }
    }
}

/// a report rendered with localized labels, digits and currency
pub struct LocalizedReport<'a> {
    report: &'a CalculationReport,
    config: &'a CalculatorConfig,
}

impl fmt::Display for LocalizedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let labels = config.labels();
        let report = self.report;
        let request = &report.request;

        writeln!(f, "{}", labels.title)?;
        let start = localize_digits(&request.start.to_string(), config);
        let end = localize_digits(&request.end.to_string(), config);

        writeln!(f, "{}: {}", labels.loan_date, start)?;
        writeln!(f, "{}: {}", labels.pay_date, end)?;
        writeln!(
            f,
            "{}: {}",
            labels.principal,
            report.display_amount(request.principal, config)
        )?;
        writeln!(
            f,
            "{}: {} ({})",
            labels.rate,
            localize_digits(&request.monthly_rate.to_string(), config),
            labels.per_month
        )?;
        writeln!(f, "{}: {}", labels.method, request.method.label(labels))?;
        writeln!(f, "{}: {}", labels.time_period, report.display_time_period(config))?;
        writeln!(
            f,
            "{}: {}",
            labels.total_interest,
            report.display_amount(report.result.total_interest, config)
        )?;
        write!(
            f,
            "{}: {}",
            labels.total_amount,
            report.display_amount(report.result.total_amount, config)
        )
    }
}

fn localize_digits(text: &str, config: &CalculatorConfig) -> String {
    if config.devanagari_digits {
        to_devanagari_digits(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::decimal::Rate;
    use crate::interest::CalculationMethod;
    use crate::period::CalendarTriple;

    fn report(method: CalculationMethod) -> CalculationReport {
        let request = CalculationRequest::builder()
            .start(CalendarTriple::new(2080, 1, 1))
            .end(CalendarTriple::new(2081, 1, 1))
            .principal(Money::from_major(100_000))
            .monthly_rate(Rate::from_percentage(2))
            .method(method)
            .build()
            .unwrap();
        Calculator::default().calculate(&request).unwrap()
    }

    #[test]
    fn test_render_english() {
        let text = report(CalculationMethod::Nepali).render(&CalculatorConfig::english());

        let expected = "Compound Interest Calculator\n\
            Loan Date: 2080/1/1\n\
            Payment Date: 2081/1/1\n\
            Principal: Rs. 1,00,000\n\
            Interest Rate (Monthly %): 2% (Per Month)\n\
            Calculation Method: Nepali Style (Yearly)\n\
            TIME PERIOD: 1 Year 0 Month 0 Day\n\
            TOTAL INTEREST: Rs. 24,000\n\
            TOTAL AMOUNT: Rs. 1,24,000";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_nepali_digits() {
        let config = CalculatorConfig::nepali().with_devanagari_digits(true);
        let text = report(CalculationMethod::Standard).render(&config);

        assert!(text.contains("रकम लिएको मिति: २०८०/१/१"));
        assert!(text.contains("मानक चक्रिय (मासिक)"));
        assert!(text.contains("कुल समय: १ साल ० महिना ० दिन"));
        assert!(text.contains("जम्मा ब्याज: रु २६,८२४"));
        assert!(text.contains("कुल जम्मा: रु १,२६,८२४"));
    }

    #[test]
    fn test_json_view() {
        let report = report(CalculationMethod::Nepali);
        let json = report.to_json_pretty().unwrap();

        assert!(json.contains("\"method\": \"nepali\""));
        let parsed: CalculationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_localized_display_matches_render() {
        let report = report(CalculationMethod::Standard);
        let config = CalculatorConfig::english();

        assert_eq!(format!("{}", report.localized(&config)), report.render(&config));
    }
}
