/// text input - validating raw field text before computing a schedule
use loan_schedule_rs::{AmortizationSchedule, LoanInput, ValidationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== valid input ===\n");

    let params = LoanInput::new()
        .principal("5,000,000")
        .term("12")
        .monthly_rate("1.8%")
        .disbursement_date("2024-01-15")
        .first_payment_date("2024-02-15")
        .validate(&ValidationConfig::default())?;

    let schedule = AmortizationSchedule::generate(&params)?;
    let summary = schedule.summary();
    println!("payment:        {:.2}", summary.payment);
    println!("total interest: {:.2}", summary.total_interest);
    println!("maturity:       {:?}", summary.maturity_date);

    println!("\n=== first invalid field ===\n");

    let bad = LoanInput::new()
        .principal("five million")
        .term("0")
        .monthly_rate("-1%")
        .disbursement_date("2024-02-30")
        .first_payment_date("2024-01-01");

    match bad.validate(&ValidationConfig::default()) {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("{}", e),
    }

    println!("\n=== every invalid field ===\n");

    match bad.check(&ValidationConfig::all_errors()) {
        Ok(_) => println!("unexpectedly valid"),
        Err(errors) => {
            for error in &errors.errors {
                println!("- {}", error);
            }
        }
    }

    Ok(())
}
