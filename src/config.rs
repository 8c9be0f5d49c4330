use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};

/// default text format for date fields
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// what to do when the first payment date precedes the disbursement date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateOrderPolicy {
    /// fail with an invalid first payment date
    #[default]
    Reject,
    /// accept; the first period gets a negative day count and negative interest
    Allow,
}

/// how many field errors a validation pass reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ErrorReport {
    /// stop at the first invalid field
    #[default]
    FirstError,
    /// check every field and report all failures
    AllErrors,
}

/// input validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub date_format: String,
    pub date_order: DateOrderPolicy,
    pub report: ErrorReport,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_order: DateOrderPolicy::Reject,
            report: ErrorReport::FirstError,
        }
    }
}

impl ValidationConfig {
    /// report every invalid field instead of the first one
    pub fn all_errors() -> Self {
        Self {
            report: ErrorReport::AllErrors,
            ..Self::default()
        }
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_date_order(mut self, policy: DateOrderPolicy) -> Self {
        self.date_order = policy;
        self
    }

    /// load from json, missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ValidationConfig =
            serde_json::from_str(json).map_err(|e| ScheduleError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// check the date format is a usable strftime pattern
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(ScheduleError::InvalidConfiguration {
                message: "date format is empty".to_string(),
            });
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ScheduleError::InvalidConfiguration {
                message: format!("unsupported date format: {}", self.date_format),
            });
        }

        Ok(())
    }
}
