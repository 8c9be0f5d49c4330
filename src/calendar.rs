use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{InputField, Result, ScheduleError};

/// add one calendar month, clamping the day to the end of the target month
pub fn next_payment_date(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(1))
}

/// signed number of calendar days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// one payment period: its due date and the days elapsed since the previous reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub date: NaiveDate,
    pub days: i64,
}

/// monthly payment dates with their day counts.
///
/// The first period runs from disbursement to the first payment date; each
/// later period runs from the previous payment date. Both the coefficient
/// pass and the schedule pass read the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodDateSequence {
    periods: Vec<Period>,
}

impl PeriodDateSequence {
    pub fn new(disbursement_date: NaiveDate, first_payment_date: NaiveDate, term: u32) -> Result<Self> {
        let mut periods = Vec::with_capacity(term as usize);
        let mut previous = disbursement_date;
        let mut current = first_payment_date;

        for index in 0..term {
            if index > 0 {
                current = next_payment_date(previous).ok_or_else(|| ScheduleError::InvalidDate {
                    field: InputField::FirstPaymentDate,
                    message: format!("payment date {} is out of range", index + 1),
                })?;
            }

            periods.push(Period {
                date: current,
                days: days_between(previous, current),
            });
            previous = current;
        }

        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn total_days(&self) -> i64 {
        self.periods.iter().map(|p| p.days).sum()
    }

    /// date of the final payment
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.periods.last().map(|p| p.date)
    }
}
