/// month-end dates - day clamping and uneven period lengths
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{AmortizationSchedule, LoanParameters, PeriodDateSequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let disbursed = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let first = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?;

    println!("=== payment dates ===\n");
    let periods = PeriodDateSequence::new(disbursed, first, 6)?;
    for period in periods.iter() {
        println!("{}  {:>2} days", period.date, period.days);
    }
    println!("total: {} days", periods.total_days());

    println!("\n=== schedule ===\n");
    let params = LoanParameters::new(600_000.0, 6, 0.015, disbursed, first)?;
    let schedule = AmortizationSchedule::generate(&params)?;
    for row in &schedule.rows {
        println!(
            "{:>2}  {}  {:>2}d  interest {:>10.2}  principal {:>11.2}  closing {:>11.2}",
            row.period, row.payment_date, row.days, row.interest, row.principal, row.closing_balance,
        );
    }
    println!("\nlevel payment: {:.2}", schedule.payment);

    Ok(())
}
