use serde::{Deserialize, Serialize};

/// display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ne")]
    Nepali,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(*self)
    }
}

/// localized label set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub loan_date: &'static str,
    pub pay_date: &'static str,
    pub principal: &'static str,
    pub rate: &'static str,
    pub rate_description: &'static str,
    pub per_month: &'static str,
    pub method: &'static str,
    pub method_nepali: &'static str,
    pub method_standard: &'static str,
    pub time_period: &'static str,
    pub total_interest: &'static str,
    pub total_amount: &'static str,
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub missing_details: &'static str,
    pub invalid_number: &'static str,
    pub amount_too_large: &'static str,
}

static NEPALI: Labels = Labels {
    title: "चक्रिय ब्याज निकाल्नुहोस्",
    loan_date: "रकम लिएको मिति",
    pay_date: "रकम बुझाउने मिति",
    principal: "मूलधन (Principal)",
    rate: "ब्याज दर (Monthly Rate %)",
    rate_description: "ब्याजदर प्रति महिना लेख्नुहोला",
    per_month: "प्रति महिना",
    method: "हिसाब गर्ने तरिका",
    method_nepali: "नेपाली शैली (वार्षिक)",
    method_standard: "मानक चक्रिय (मासिक)",
    time_period: "कुल समय",
    total_interest: "जम्मा ब्याज",
    total_amount: "कुल जम्मा",
    year: "साल",
    month: "महिना",
    day: "दिन",
    missing_details: "कृपया सबै विवरणहरू भर्नुहोला।",
    invalid_number: "कृपया सही अंक लेख्नुहोला।",
    amount_too_large: "रकम धेरै ठूलो भयो, कृपया मिति र ब्याज दर जाँच्नुहोला।",
};

static ENGLISH: Labels = Labels {
    title: "Compound Interest Calculator",
    loan_date: "Loan Date",
    pay_date: "Payment Date",
    principal: "Principal",
    rate: "Interest Rate (Monthly %)",
    rate_description: "Enter monthly interest rate",
    per_month: "Per Month",
    method: "Calculation Method",
    method_nepali: "Nepali Style (Yearly)",
    method_standard: "Standard (Monthly)",
    time_period: "TIME PERIOD",
    total_interest: "TOTAL INTEREST",
    total_amount: "TOTAL AMOUNT",
    year: "Year",
    month: "Month",
    day: "Day",
    missing_details: "Please fill all details.",
    invalid_number: "Please enter valid numbers.",
    amount_too_large: "Amount too large. Please check the dates and rate.",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Nepali => &NEPALI,
            Language::English => &ENGLISH,
        }
    }
}
