pub mod amortization;
pub mod coefficient;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::types::{LoanParameters, ScheduleRow};

pub use amortization::{AmortizationSchedule, ScheduleGenerator, ScheduleSummary};
pub use coefficient::{CoefficientSolution, CoefficientSolver};

/// compute the level-payment schedule rows for a loan.
///
/// Rejects invalid parameters (including a first payment date before the
/// disbursement date) with the matching error kind before any arithmetic runs.
pub fn compute_schedule(
    principal: f64,
    term: u32,
    monthly_rate: f64,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
) -> Result<Vec<ScheduleRow>> {
    let parameters =
        LoanParameters::new(principal, term, monthly_rate, disbursement_date, first_payment_date)?;
    Ok(AmortizationSchedule::generate(&parameters)?.into_rows())
}
