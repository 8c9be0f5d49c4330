use std::fmt;

use thiserror::Error;

/// input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum InputField {
    Principal,
    Term,
    MonthlyRate,
    DisbursementDate,
    FirstPaymentDate,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Principal => "principal",
            InputField::Term => "term",
            InputField::MonthlyRate => "monthly rate",
            InputField::DisbursementDate => "disbursement date",
            InputField::FirstPaymentDate => "first payment date",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("invalid principal: {value}")]
    InvalidPrincipal {
        value: String,
    },

    #[error("invalid term: {value}")]
    InvalidTerm {
        value: String,
    },

    #[error("invalid monthly rate: {value}")]
    InvalidRate {
        value: String,
    },

    #[error("invalid {field}: {message}")]
    InvalidDate {
        field: InputField,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl ScheduleError {
    /// the input field this error is about, if any
    pub fn field(&self) -> Option<InputField> {
        match self {
            ScheduleError::InvalidPrincipal { .. } => Some(InputField::Principal),
            ScheduleError::InvalidTerm { .. } => Some(InputField::Term),
            ScheduleError::InvalidRate { .. } => Some(InputField::MonthlyRate),
            ScheduleError::InvalidDate { field, .. } => Some(*field),
            ScheduleError::InvalidConfiguration { .. } | ScheduleError::CalculationError { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// every field error found in one validation pass, in field order
#[derive(Error, Debug, Clone, PartialEq, Default)]
#[error("{}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<ScheduleError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ScheduleError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// fields that failed, in the order they were checked
    pub fn fields(&self) -> Vec<InputField> {
        self.errors.iter().filter_map(ScheduleError::field).collect()
    }

    /// first error, matching single-error reporting
    pub fn first(&self) -> Option<&ScheduleError> {
        self.errors.first()
    }
}

impl From<ScheduleError> for ValidationErrors {
    fn from(error: ScheduleError) -> Self {
        Self { errors: vec![error] }
    }
}

fn summary(errors: &[ScheduleError]) -> String {
    let details = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} invalid input field(s): {}", errors.len(), details)
}
