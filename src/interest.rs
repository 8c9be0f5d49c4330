//! actual/365 accrual on a nominal monthly rate

/// days in the accrual year
pub const DAYS_IN_YEAR: f64 = 365.0;

/// monthly-to-annual rate scaling
pub const MONTHS_IN_YEAR: f64 = 12.0;

/// fraction of the balance accrued as interest over `days` days.
///
/// Shared by the coefficient and schedule passes so both see the same bits.
pub fn period_rate(monthly_rate: f64, days: i64) -> f64 {
    monthly_rate * MONTHS_IN_YEAR / DAYS_IN_YEAR * days as f64
}

/// per-period growth factor `1 + period_rate`
pub fn growth_factor(monthly_rate: f64, days: i64) -> f64 {
    1.0 + period_rate(monthly_rate, days)
}

/// interest accrued on `balance` over `days` days
pub fn accrued_interest(balance: f64, monthly_rate: f64, days: i64) -> f64 {
    balance * period_rate(monthly_rate, days)
}
