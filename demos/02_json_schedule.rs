/// json schedule - serialized snapshot of a computed schedule
use loan_schedule_rs::{AmortizationSchedule, LoanInput, SafeTimeProvider, TimeSource, ValidationConfig};
use loan_schedule_rs::chrono::{TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
    ));

    // blank disbursement date means today
    let params = LoanInput::new()
        .principal("250,000")
        .term("6")
        .monthly_rate("2")
        .first_payment_date("2024-04-10")
        .validate_with_time(&ValidationConfig::default(), &time)?;

    let schedule = AmortizationSchedule::generate(&params)?;
    println!("{}", schedule.json());

    Ok(())
}
