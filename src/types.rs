use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::config::DateOrderPolicy;
use crate::errors::{InputField, Result, ScheduleError};
use crate::interest::growth_factor;

/// validated loan parameters, immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    principal: f64,
    term: u32,
    monthly_rate: f64,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
}

impl LoanParameters {
    /// validate and build, rejecting a first payment date before disbursement
    pub fn new(
        principal: f64,
        term: u32,
        monthly_rate: f64,
        disbursement_date: NaiveDate,
        first_payment_date: NaiveDate,
    ) -> Result<Self> {
        Self::with_policy(
            principal,
            term,
            monthly_rate,
            disbursement_date,
            first_payment_date,
            DateOrderPolicy::Reject,
        )
    }

    /// validate and build with an explicit date-order policy
    pub fn with_policy(
        principal: f64,
        term: u32,
        monthly_rate: f64,
        disbursement_date: NaiveDate,
        first_payment_date: NaiveDate,
        date_order: DateOrderPolicy,
    ) -> Result<Self> {
        check_principal(principal)?;
        check_term(term)?;
        check_rate(monthly_rate)?;
        check_date_order(disbursement_date, first_payment_date, date_order)?;
        check_first_period(monthly_rate, disbursement_date, first_payment_date)?;

        Ok(Self {
            principal,
            term,
            monthly_rate,
            disbursement_date,
            first_payment_date,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// number of monthly payment periods
    pub fn term(&self) -> u32 {
        self.term
    }

    /// nominal monthly rate, 0.02 for 2%
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    pub fn disbursement_date(&self) -> NaiveDate {
        self.disbursement_date
    }

    pub fn first_payment_date(&self) -> NaiveDate {
        self.first_payment_date
    }
}

pub(crate) fn check_principal(principal: f64) -> Result<()> {
    if principal.is_finite() && principal > 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidPrincipal {
            value: principal.to_string(),
        })
    }
}

pub(crate) fn check_term(term: u32) -> Result<()> {
    if term == 0 {
        return Err(ScheduleError::InvalidTerm {
            value: term.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_rate(monthly_rate: f64) -> Result<()> {
    if monthly_rate.is_finite() && monthly_rate >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidRate {
            value: monthly_rate.to_string(),
        })
    }
}

pub(crate) fn check_date_order(
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
    policy: DateOrderPolicy,
) -> Result<()> {
    match policy {
        DateOrderPolicy::Reject if first_payment_date < disbursement_date => {
            Err(ScheduleError::InvalidDate {
                field: InputField::FirstPaymentDate,
                message: format!(
                    "first payment {} is before disbursement {}",
                    first_payment_date, disbursement_date
                ),
            })
        }
        _ => Ok(()),
    }
}

/// a first payment before disbursement shrinks the first growth factor; it
/// must stay positive for the payment to be positive
pub(crate) fn check_first_period(
    monthly_rate: f64,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
) -> Result<()> {
    let days = days_between(disbursement_date, first_payment_date);
    let factor = growth_factor(monthly_rate, days);
    if factor > 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidDate {
            field: InputField::FirstPaymentDate,
            message: format!(
                "first period of {} days gives non-positive growth factor {}",
                days, factor
            ),
        })
    }
}

/// one period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period index
    pub period: u32,
    pub payment_date: NaiveDate,
    pub days: i64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// balance before this period's principal is applied
    pub opening_balance: f64,
    pub closing_balance: f64,
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,
}
