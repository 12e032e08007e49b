/// quick start - one calculation from code
use chakriya_byaj_rs::{
    CalculationMethod, CalculationRequest, Calculator, CalculatorConfig, CalendarTriple, Money,
    Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // rs 1,00,000 at 2% per month for one year and a half month
    let request = CalculationRequest::builder()
        .start(CalendarTriple::new(2080, 1, 1))
        .end(CalendarTriple::new(2081, 1, 16))
        .principal(Money::from_major(100_000))
        .monthly_rate(Rate::from_percentage(2))
        .method(CalculationMethod::Nepali)
        .build()?;

    let calculator = Calculator::new(CalculatorConfig::english());
    let report = calculator.calculate(&request)?;

    println!("{}", report.render(&calculator.config));
    println!();
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
