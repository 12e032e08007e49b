/// compare nepali yearly compounding with standard monthly compounding
use chakriya_byaj_rs::{
    calculate_interest, format_amount, CalculationMethod, CalendarTriple, Money, Rate,
    TimeBreakdown,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let principal = Money::from_major(500_000);
    let rate = Rate::from_percentage(2);
    let start = CalendarTriple::new(2075, 4, 10);

    println!("{:<12} {:>16} {:>16}", "period", "nepali", "standard");
    for (years, months, days) in [(0, 6, 0), (1, 0, 0), (2, 3, 15), (5, 0, 0)] {
        let end = CalendarTriple::new(start.year + years, start.month + months, start.day + days);
        let time = TimeBreakdown::between(start, end);

        let nepali = calculate_interest(principal, rate, &time, CalculationMethod::Nepali)?;
        let standard = calculate_interest(principal, rate, &time, CalculationMethod::Standard)?;

        println!(
            "{:<12} {:>16} {:>16}",
            format!("{}y {}m {}d", time.years, time.months, time.days),
            format_amount(nepali.total_interest.as_decimal()),
            format_amount(standard.total_interest.as_decimal()),
        );
    }

    Ok(())
}
