pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod input;
pub mod interest;
pub mod payments;
pub mod serialization;
pub mod types;

// re-export key types
pub use calendar::{days_between, next_payment_date, Period, PeriodDateSequence};
pub use config::{DateOrderPolicy, ErrorReport, ValidationConfig};
pub use decimal::{Money, Rate};
pub use errors::{InputField, Result, ScheduleError, ValidationErrors};
pub use input::LoanInput;
pub use payments::{
    compute_schedule, AmortizationSchedule, CoefficientSolution, CoefficientSolver,
    ScheduleGenerator, ScheduleSummary,
};
pub use serialization::ScheduleView;
pub use types::{LoanParameters, ScheduleRow};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
