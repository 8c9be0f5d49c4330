//! serialization support for schedules
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::payments::AmortizationSchedule;
use crate::types::ScheduleRow;

/// serializable snapshot of a computed schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleView {
    pub loan: LoanView,
    pub totals: TotalsView,
    pub rows: Vec<RowView>,
    pub metadata: MetadataView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub principal: Money,
    pub term_months: u32,
    pub monthly_rate: Rate,
    pub disbursement_date: NaiveDate,
    pub first_payment_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalsView {
    pub payment: Money,
    pub coefficient: f64,
    pub total_interest: Money,
    pub total_payment: Money,
    pub final_balance: Money,
    pub maturity_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RowView {
    pub period: u32,
    pub payment_date: NaiveDate,
    pub days: i64,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub opening_balance: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataView {
    pub day_count_convention: String,
    pub rate_scaling: String,
    pub payment_frequency: String,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &AmortizationSchedule) -> Result<Self> {
        let parameters = &schedule.parameters;
        let summary = schedule.summary();

        let rows = schedule
            .rows
            .iter()
            .map(RowView::from_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(ScheduleView {
            loan: LoanView {
                principal: money("principal", parameters.principal())?,
                term_months: parameters.term(),
                monthly_rate: Rate::from_f64(parameters.monthly_rate()).ok_or_else(|| {
                    ScheduleError::CalculationError {
                        message: format!("monthly rate {} is not representable", parameters.monthly_rate()),
                    }
                })?,
                disbursement_date: parameters.disbursement_date(),
                first_payment_date: parameters.first_payment_date(),
            },
            totals: TotalsView {
                payment: money("payment", summary.payment)?,
                coefficient: summary.coefficient,
                total_interest: money("total interest", summary.total_interest)?,
                total_payment: money("total payment", summary.total_payment)?,
                final_balance: money("final balance", summary.final_balance)?,
                maturity_date: summary.maturity_date,
            },
            rows,
            metadata: MetadataView {
                day_count_convention: "Actual365".to_string(),
                rate_scaling: "monthly x 12".to_string(),
                payment_frequency: "Monthly".to_string(),
            },
        })
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl RowView {
    fn from_row(row: &ScheduleRow) -> Result<Self> {
        Ok(RowView {
            period: row.period,
            payment_date: row.payment_date,
            days: row.days,
            payment: money("payment", row.payment)?,
            interest: money("interest", row.interest)?,
            principal: money("principal portion", row.principal)?,
            opening_balance: money("opening balance", row.opening_balance)?,
            closing_balance: money("closing balance", row.closing_balance)?,
        })
    }
}

fn money(label: &str, amount: f64) -> Result<Money> {
    Money::from_f64(amount).ok_or_else(|| ScheduleError::CalculationError {
        message: format!("{} {} is not representable as money", label, amount),
    })
}

impl AmortizationSchedule {
    /// serializable snapshot of this schedule
    pub fn view(&self) -> Result<ScheduleView> {
        ScheduleView::from_schedule(self)
    }

    /// get json representation of the schedule
    pub fn to_json_pretty(&self) -> String {
        match self.view() {
            Ok(view) => view
                .to_json_pretty()
                .unwrap_or_else(|e| format!("JSON error: {}", e)),
            Err(e) => format!("JSON error: {}", e),
        }
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}
