/// form input - validate raw text the way a ui would submit it
use chakriya_byaj_rs::{CalculationMethod, Calculator, CalculatorConfig, CalculatorForm, DateFields};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let calculator = Calculator::new(CalculatorConfig::nepali().with_devanagari_digits(true));

    let form = CalculatorForm {
        loan_date: DateFields::new("२०८०", "०८", "१५"),
        pay_date: DateFields::new("२०८२", "०२", "१०"),
        principal: "3,50,000".to_string(),
        rate: "1.5".to_string(),
        method: CalculationMethod::Nepali,
    };

    match calculator.summary(&form) {
        Ok(text) => println!("{}", text),
        Err(message) => eprintln!("{}", message),
    }

    // text that is not a number produces the localized error instead of a result
    let invalid = CalculatorForm {
        principal: "abc".to_string(),
        ..form
    };
    match calculator.summary(&invalid) {
        Ok(text) => println!("{}", text),
        Err(message) => eprintln!("{}", message),
    }
}
