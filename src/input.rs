//! raw text fields to validated loan parameters

use std::str::FromStr;

use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::{ErrorReport, ValidationConfig};
use crate::decimal::Rate;
use crate::errors::{InputField, Result, ScheduleError, ValidationErrors};
use crate::types::{check_date_order, LoanParameters};

/// loan fields as typed by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanInput {
    principal: String,
    term: String,
    monthly_rate: String,
    disbursement_date: String,
    first_payment_date: String,
}

impl LoanInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// amount, thousands separators allowed ("1,200,000")
    pub fn principal(mut self, text: impl Into<String>) -> Self {
        self.principal = text.into();
        self
    }

    /// number of monthly payments
    pub fn term(mut self, text: impl Into<String>) -> Self {
        self.term = text.into();
        self
    }

    /// monthly rate in percent ("2" or "2%"); blank reads as 0%
    pub fn monthly_rate(mut self, text: impl Into<String>) -> Self {
        self.monthly_rate = text.into();
        self
    }

    /// blank means today
    pub fn disbursement_date(mut self, text: impl Into<String>) -> Self {
        self.disbursement_date = text.into();
        self
    }

    /// blank means today
    pub fn first_payment_date(mut self, text: impl Into<String>) -> Self {
        self.first_payment_date = text.into();
        self
    }

    /// validate against the system clock, returning the first invalid field
    pub fn validate(&self, config: &ValidationConfig) -> Result<LoanParameters> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.validate_with_time(config, &time)
    }

    /// validate with an explicit clock, returning the first invalid field
    pub fn validate_with_time(
        &self,
        config: &ValidationConfig,
        time: &SafeTimeProvider,
    ) -> Result<LoanParameters> {
        config.validate()?;
        self.collect(config, time, true).map_err(|mut errors| errors.errors.remove(0))
    }

    /// validate against the system clock, reporting per `config.report`
    pub fn check(
        &self,
        config: &ValidationConfig,
    ) -> std::result::Result<LoanParameters, ValidationErrors> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.check_with_time(config, &time)
    }

    /// validate with an explicit clock, reporting per `config.report`
    pub fn check_with_time(
        &self,
        config: &ValidationConfig,
        time: &SafeTimeProvider,
    ) -> std::result::Result<LoanParameters, ValidationErrors> {
        config.validate()?;
        let stop_at_first = config.report == ErrorReport::FirstError;
        self.collect(config, time, stop_at_first)
    }

    fn collect(
        &self,
        config: &ValidationConfig,
        time: &SafeTimeProvider,
        stop_at_first: bool,
    ) -> std::result::Result<LoanParameters, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let today = time.now().date_naive();

        macro_rules! field {
            ($parsed:expr) => {
                match $parsed {
                    Ok(value) => Some(value),
                    Err(error) => {
                        warn!(%error, "rejected loan input");
                        errors.push(error);
                        if stop_at_first {
                            return Err(errors);
                        }
                        None
                    }
                }
            };
        }

        let principal = field!(parse_principal(&self.principal));
        let term = field!(parse_term(&self.term));
        let monthly_rate = field!(parse_rate(&self.monthly_rate));
        let disbursement_date = field!(parse_date(
            &self.disbursement_date,
            InputField::DisbursementDate,
            &config.date_format,
            today,
        ));
        let first_payment_date = field!(parse_date(
            &self.first_payment_date,
            InputField::FirstPaymentDate,
            &config.date_format,
            today,
        ));

        if let (Some(disbursement), Some(first)) = (disbursement_date, first_payment_date) {
            field!(check_date_order(disbursement, first, config.date_order));
        }

        match (principal, term, monthly_rate, disbursement_date, first_payment_date) {
            (Some(p), Some(n), Some(r), Some(d), Some(f)) if errors.is_empty() => {
                LoanParameters::with_policy(p, n, r, d, f, config.date_order).map_err(Into::into)
            }
            _ => Err(errors),
        }
    }
}

fn parse_principal(text: &str) -> Result<f64> {
    let invalid = || ScheduleError::InvalidPrincipal {
        value: text.to_string(),
    };

    let cleaned: String = text.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let amount = Decimal::from_str(&cleaned).map_err(|_| invalid())?;
    if amount <= Decimal::ZERO {
        return Err(invalid());
    }
    amount.to_f64().ok_or_else(invalid)
}

fn parse_term(text: &str) -> Result<u32> {
    match text.trim().parse::<u32>() {
        Ok(term) if term > 0 => Ok(term),
        _ => Err(ScheduleError::InvalidTerm {
            value: text.to_string(),
        }),
    }
}

fn parse_rate(text: &str) -> Result<f64> {
    let invalid = || ScheduleError::InvalidRate {
        value: text.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "%" {
        return Ok(0.0);
    }

    let rate = Rate::from_percent_str(trimmed).map_err(|_| invalid())?;
    if rate.is_negative() {
        return Err(invalid());
    }
    rate.to_f64().ok_or_else(invalid)
}

fn parse_date(text: &str, field: InputField, format: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(today);
    }

    NaiveDate::parse_from_str(trimmed, format).map_err(|e| ScheduleError::InvalidDate {
        field,
        message: format!("'{}' does not match {}: {}", trimmed, format, e),
    })
}
