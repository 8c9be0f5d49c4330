/// quick start - minimal example to get started
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::compute_schedule;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1,200,000 over 2 months at 2% per month
    let rows = compute_schedule(
        1_200_000.0,
        2,
        0.02,
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2024, 2, 1).ok_or("bad date")?,
    )?;

    for row in &rows {
        println!(
            "{:>3}  {}  {:>3}d  payment {:>14.2}  interest {:>12.2}  principal {:>14.2}  balance {:>14.2}",
            row.period,
            row.payment_date,
            row.days,
            row.payment,
            row.interest,
            row.principal,
            row.opening_balance,
        );
    }

    Ok(())
}
