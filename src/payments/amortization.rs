use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::PeriodDateSequence;
use crate::errors::Result;
use crate::interest::accrued_interest;
use crate::types::{LoanParameters, ScheduleRow};

use super::coefficient::CoefficientSolver;

/// level-payment amortization schedule
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationSchedule {
    pub parameters: LoanParameters,
    pub coefficient: f64,
    pub payment: f64,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// headline figures of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub payment: f64,
    pub coefficient: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub final_balance: f64,
    pub maturity_date: Option<NaiveDate>,
}

impl AmortizationSchedule {
    /// solve the level payment and replay it over the payment dates
    pub fn generate(parameters: &LoanParameters) -> Result<Self> {
        let periods = PeriodDateSequence::new(
            parameters.disbursement_date(),
            parameters.first_payment_date(),
            parameters.term(),
        )?;

        let solution = CoefficientSolver::new(parameters.monthly_rate()).solve(&periods);
        let payment = solution.payment(parameters.principal());

        let rows = ScheduleGenerator::new(parameters.monthly_rate(), payment)
            .generate(parameters.principal(), &periods);

        let total_interest: f64 = rows.iter().map(|r| r.interest).sum();
        let total_payment: f64 = rows.iter().map(|r| r.payment).sum();

        debug!(
            term = parameters.term(),
            payment,
            total_interest,
            final_balance = rows.last().map(|r| r.closing_balance).unwrap_or_default(),
            "generated amortization schedule"
        );

        Ok(Self {
            parameters: *parameters,
            coefficient: solution.coefficient,
            payment,
            rows,
            total_interest,
            total_payment,
        })
    }

    /// row for a 1-based period number
    pub fn row(&self, period: u32) -> Option<&ScheduleRow> {
        let index = period.checked_sub(1)?;
        self.rows.get(index as usize)
    }

    /// remaining balance after a period: principal before the first one,
    /// final balance past the last one
    pub fn balance_after(&self, period: u32) -> f64 {
        match self.row(period) {
            Some(row) => row.closing_balance,
            None if period == 0 => self.parameters.principal(),
            None => self.final_balance(),
        }
    }

    /// closing balance of the last row
    pub fn final_balance(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.closing_balance)
            .unwrap_or(self.parameters.principal())
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            payment: self.payment,
            coefficient: self.coefficient,
            total_interest: self.total_interest,
            total_payment: self.total_payment,
            final_balance: self.final_balance(),
            maturity_date: self.rows.last().map(|r| r.payment_date),
        }
    }

    pub fn into_rows(self) -> Vec<ScheduleRow> {
        self.rows
    }
}

/// replays a level payment over the period sequence
pub struct ScheduleGenerator {
    monthly_rate: f64,
    payment: f64,
}

impl ScheduleGenerator {
    pub fn new(monthly_rate: f64, payment: f64) -> Self {
        Self {
            monthly_rate,
            payment,
        }
    }

    /// one row per period; no rounding, no final-row adjustment
    pub fn generate(&self, principal: f64, periods: &PeriodDateSequence) -> Vec<ScheduleRow> {
        let mut rows = Vec::with_capacity(periods.len());
        let mut balance = principal;
        let mut cumulative_interest = 0.0;
        let mut cumulative_principal = 0.0;

        for (index, period) in periods.iter().enumerate() {
            let interest = accrued_interest(balance, self.monthly_rate, period.days);
            let principal_portion = self.payment - interest;
            let closing_balance = balance - principal_portion;

            cumulative_interest += interest;
            cumulative_principal += principal_portion;

            let row = ScheduleRow {
                period: index as u32 + 1,
                payment_date: period.date,
                days: period.days,
                payment: self.payment,
                interest,
                principal: principal_portion,
                opening_balance: balance,
                closing_balance,
                cumulative_interest,
                cumulative_principal,
            };
            trace!(period = row.period, days = row.days, interest, closing_balance, "schedule row");
            rows.push(row);

            balance = closing_balance;
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateOrderPolicy;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(principal: f64, term: u32, rate: f64, start: NaiveDate, first: NaiveDate) -> LoanParameters {
        LoanParameters::new(principal, term, rate, start, first).unwrap()
    }

    #[test]
    fn test_worked_scenario() {
        let schedule = AmortizationSchedule::generate(&params(
            1_200_000.0,
            2,
            0.02,
            date(2024, 1, 1),
            date(2024, 2, 1),
        ))
        .unwrap();

        assert_eq!(schedule.rows.len(), 2);
        assert_relative_eq!(schedule.coefficient, 1.941_709_358_174_271, epsilon = 1e-12);
        assert_relative_eq!(schedule.payment, 618_012.162_813_245_4, epsilon = 1e-6);

        let first = &schedule.rows[0];
        assert_eq!(first.period, 1);
        assert_eq!(first.payment_date, date(2024, 2, 1));
        assert_eq!(first.days, 31);
        assert_eq!(first.opening_balance, 1_200_000.0);
        assert_relative_eq!(first.interest, 24_460.273_972_602_74, epsilon = 1e-6);
        assert_relative_eq!(first.principal, 593_551.888_840_642_6, epsilon = 1e-6);

        let second = &schedule.rows[1];
        assert_eq!(second.period, 2);
        assert_eq!(second.payment_date, date(2024, 3, 1));
        assert_eq!(second.days, 29);
        assert_relative_eq!(second.opening_balance, 606_448.111_159_357_4, epsilon = 1e-6);
        assert_relative_eq!(second.interest, 11_564.051_653_888_02, epsilon = 1e-6);

        assert!(schedule.final_balance().abs() < 1e-6);
        assert_relative_eq!(schedule.total_interest, 36_024.325_626_490_76, epsilon = 1e-6);
        assert_relative_eq!(schedule.total_payment, 2.0 * schedule.payment);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = AmortizationSchedule::generate(&params(
            120_000.0,
            12,
            0.0,
            date(2024, 1, 10),
            date(2024, 2, 25),
        ))
        .unwrap();

        assert_eq!(schedule.coefficient, 12.0);
        assert_eq!(schedule.payment, 10_000.0);
        for row in &schedule.rows {
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.principal, row.payment);
        }
        assert_eq!(schedule.final_balance(), 0.0);
        assert_eq!(schedule.total_interest, 0.0);
    }

    #[test]
    fn test_same_day_first_payment() {
        let schedule = AmortizationSchedule::generate(&params(
            10_000.0,
            6,
            0.02,
            date(2024, 6, 15),
            date(2024, 6, 15),
        ))
        .unwrap();

        let first = &schedule.rows[0];
        assert_eq!(first.days, 0);
        assert_eq!(first.interest, 0.0);
        assert_eq!(first.principal, schedule.payment);
        assert!(schedule.final_balance().abs() < 1e-6 * 10_000.0);
    }

    #[test]
    fn test_single_period_pays_principal_plus_interest() {
        let schedule = AmortizationSchedule::generate(&params(
            1_000.0,
            1,
            0.03,
            date(2023, 4, 1),
            date(2023, 5, 1),
        ))
        .unwrap();

        let expected = 1_000.0 * (1.0 + 0.03 * 12.0 / 365.0 * 30.0);
        assert_relative_eq!(schedule.payment, expected, epsilon = 1e-9);
        assert!(schedule.final_balance().abs() < 1e-9);
    }

    #[test]
    fn test_month_end_dates_in_rows() {
        let schedule = AmortizationSchedule::generate(&params(
            50_000.0,
            3,
            0.01,
            date(2024, 3, 1),
            date(2024, 3, 31),
        ))
        .unwrap();

        let dates: Vec<_> = schedule.rows.iter().map(|r| r.payment_date).collect();
        assert_eq!(dates, vec![date(2024, 3, 31), date(2024, 4, 30), date(2024, 5, 30)]);

        let days: Vec<_> = schedule.rows.iter().map(|r| r.days).collect();
        assert_eq!(days, vec![30, 30, 30]);
    }

    #[test]
    fn test_negative_first_period_when_allowed() {
        let parameters = LoanParameters::with_policy(
            10_000.0,
            3,
            0.02,
            date(2024, 2, 10),
            date(2024, 2, 1),
            DateOrderPolicy::Allow,
        )
        .unwrap();
        let schedule = AmortizationSchedule::generate(&parameters).unwrap();

        assert_eq!(schedule.rows[0].days, -9);
        assert!(schedule.rows[0].interest < 0.0);
        assert!(schedule.final_balance().abs() < 1e-6 * 10_000.0);
    }

    #[test]
    fn test_row_lookup() {
        let schedule = AmortizationSchedule::generate(&params(
            24_000.0,
            24,
            0.015,
            date(2024, 1, 1),
            date(2024, 2, 1),
        ))
        .unwrap();

        assert!(schedule.row(0).is_none());
        assert!(schedule.row(25).is_none());
        assert_eq!(schedule.row(1).unwrap().period, 1);
        assert_eq!(schedule.row(24).unwrap().period, 24);

        assert_eq!(schedule.balance_after(0), 24_000.0);
        assert_eq!(schedule.balance_after(3), schedule.rows[2].closing_balance);
        assert!(schedule.balance_after(24).abs() < 1e-6);
        assert_eq!(schedule.balance_after(25), schedule.final_balance());
        assert_eq!(schedule.balance_after(u32::MAX), schedule.final_balance());

        let summary = schedule.summary();
        assert_eq!(summary.payment, schedule.payment);
        assert_eq!(summary.maturity_date, Some(date(2026, 1, 1)));
        assert_eq!(summary.final_balance, schedule.final_balance());
    }

    #[test]
    fn test_interest_declines_over_regular_months() {
        let schedule = AmortizationSchedule::generate(&params(
            100_000.0,
            12,
            0.01,
            date(2024, 1, 1),
            date(2024, 2, 1),
        ))
        .unwrap();

        // per-day interest falls as the balance amortizes
        for pair in schedule.rows.windows(2) {
            let a = pair[0].interest / pair[0].days as f64;
            let b = pair[1].interest / pair[1].days as f64;
            assert!(b < a);
        }
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2080i32, 1u32..13u32, 1u32..32u32)
            .prop_filter_map("valid date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn test_schedule_invariants(
            principal in 1_000.0f64..10_000_000.0,
            term in 1u32..360,
            rate in 0.0f64..0.03,
            start in date_strategy(),
            offset in 0i64..45,
        ) {
            let first = start + chrono::Duration::days(offset);
            let schedule = AmortizationSchedule::generate(&params(principal, term, rate, start, first)).unwrap();

            prop_assert_eq!(schedule.rows.len(), term as usize);

            // full amortization
            prop_assert!(schedule.final_balance().abs() <= 1e-6 * principal);

            let mut reference = start;
            let mut opening = principal;
            for (i, row) in schedule.rows.iter().enumerate() {
                // level payment, ordered periods
                prop_assert_eq!(row.payment, schedule.payment);
                prop_assert_eq!(row.period, i as u32 + 1);

                // balance carry
                prop_assert_eq!(row.opening_balance, opening);
                prop_assert_eq!(row.closing_balance, row.opening_balance - row.principal);
                prop_assert_eq!(row.principal, row.payment - row.interest);

                // day counts follow the dates
                prop_assert_eq!(row.days, crate::calendar::days_between(reference, row.payment_date));
                if i > 0 {
                    prop_assert_eq!(Some(row.payment_date), crate::calendar::next_payment_date(reference));
                }

                opening = row.closing_balance;
                reference = row.payment_date;
            }

            let principal_paid: f64 = schedule.rows.iter().map(|r| r.principal).sum();
            prop_assert!((principal_paid - principal).abs() <= 1e-6 * principal);
        }

        #[test]
        fn test_zero_rate_exact(
            principal in 1.0f64..1_000_000.0,
            term in 1u32..480,
            start in date_strategy(),
        ) {
            let first = start + chrono::Duration::days(30);
            let schedule = AmortizationSchedule::generate(&params(principal, term, 0.0, start, first)).unwrap();

            prop_assert_eq!(schedule.coefficient, term as f64);
            prop_assert_eq!(schedule.payment, principal / term as f64);
            for row in &schedule.rows {
                prop_assert_eq!(row.interest, 0.0);
                prop_assert_eq!(row.principal, schedule.payment);
            }
        }
    }
}
