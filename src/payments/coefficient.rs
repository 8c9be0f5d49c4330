use tracing::debug;

use crate::calendar::PeriodDateSequence;
use crate::interest::growth_factor;

/// result of the coefficient pass
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSolution {
    /// sum of reciprocal cumulative growth factors
    pub coefficient: f64,
    /// cumulative growth factor at each period
    pub cumulative_factors: Vec<f64>,
}

impl CoefficientSolution {
    /// level payment for the given principal
    pub fn payment(&self, principal: f64) -> f64 {
        principal / self.coefficient
    }
}

/// solves for the coefficient that turns principal into a level payment.
///
/// With `c_i` the running product of `1 + r * 12 / 365 * days_i`, the
/// coefficient is `sum(1 / c_i)` and the payment is `principal / coef`.
/// Performs no validation: callers pass a non-empty sequence and a rate
/// that keeps every factor positive.
pub struct CoefficientSolver {
    monthly_rate: f64,
}

impl CoefficientSolver {
    pub fn new(monthly_rate: f64) -> Self {
        Self { monthly_rate }
    }

    pub fn solve(&self, periods: &PeriodDateSequence) -> CoefficientSolution {
        let mut cumulative = 1.0;
        let mut coefficient = 0.0;
        let mut cumulative_factors = Vec::with_capacity(periods.len());

        for period in periods.iter() {
            cumulative *= growth_factor(self.monthly_rate, period.days);
            coefficient += 1.0 / cumulative;
            cumulative_factors.push(cumulative);
        }

        debug!(
            periods = periods.len(),
            coefficient,
            monthly_rate = self.monthly_rate,
            "solved level payment coefficient"
        );

        CoefficientSolution {
            coefficient,
            cumulative_factors,
        }
    }
}
