use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid {field} '{value}' on line {line}: {reason}")]
    InvalidFieldError {
        line: u64,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Tenant id {id} appears more than once (again on line {line})")]
    DuplicateTenantError { id: u32, line: u64 },

    #[error("Tenant {id} has inconsistent tenancy dates: {message}")]
    InconsistentTenancyError { id: u32, message: String },

    #[error("No tenant was resident between {start} and {end}")]
    ZeroBillableDaysError { start: NaiveDate, end: NaiveDate },

    #[error("Total tenant days between {start} and {end} exceed {max}", max = u32::MAX)]
    DayCountOverflowError { start: NaiveDate, end: NaiveDate },

    #[error("Reconciliation failed for {what}: expected {expected}, got {actual}")]
    ReconciliationError {
        what: String,
        expected: f64,
        actual: f64,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    InputData,
    Configuration,
    Calculation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BillError::IoError(_) | BillError::SerializationError(_) => ErrorCategory::Io,
            BillError::CsvError(_)
            | BillError::InvalidFieldError { .. }
            | BillError::DuplicateTenantError { .. }
            | BillError::InconsistentTenancyError { .. } => ErrorCategory::InputData,
            BillError::MissingConfigError { .. }
            | BillError::InvalidConfigValueError { .. }
            | BillError::ConfigParseError { .. } => ErrorCategory::Configuration,
            BillError::ZeroBillableDaysError { .. }
            | BillError::DayCountOverflowError { .. }
            | BillError::ReconciliationError { .. } => ErrorCategory::Calculation,
        }
    }

    /// Drives the process exit code: Medium = 2, High = 1, Critical = 3.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BillError::IoError(_)
            | BillError::SerializationError(_)
            | BillError::ReconciliationError { .. } => ErrorSeverity::Critical,
            BillError::MissingConfigError { .. }
            | BillError::InvalidConfigValueError { .. }
            | BillError::ConfigParseError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BillError::IoError(_) => "Check that the tenant file exists and is readable",
            BillError::CsvError(_) => {
                "Make sure every tenant row has the same 8 columns as the header"
            }
            BillError::SerializationError(_) => "Try the text output format instead",
            BillError::InvalidFieldError { .. } => {
                "Fix the field in the tenant file; dates look like \"Oct 20, 2018\""
            }
            BillError::DuplicateTenantError { .. } => "Give every tenant a unique id",
            BillError::InconsistentTenancyError { .. } => {
                "A tenant cannot move out before moving in; correct the dates"
            }
            BillError::ZeroBillableDaysError { .. } => {
                "Check the billing period against the tenants' move-in and move-out dates"
            }
            BillError::DayCountOverflowError { .. } => {
                "Shorten the billing period or split the tenant file"
            }
            BillError::ReconciliationError { .. } => {
                "The computed shares do not add up; report this with the input used"
            }
            BillError::MissingConfigError { .. } => {
                "Pass the value on the command line or set it in the [bill] section of the config file"
            }
            BillError::InvalidConfigValueError { .. } => "Correct the configuration value",
            BillError::ConfigParseError { .. } => "Make sure the config file is valid TOML",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::InputData => format!("The tenant file has a problem: {}", self),
            ErrorCategory::Configuration => format!("The bill configuration is invalid: {}", self),
            ErrorCategory::Calculation => format!("The bill could not be split: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let config = BillError::MissingConfigError {
            field: "bill.total".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
        assert_eq!(config.category(), ErrorCategory::Configuration);

        let data = BillError::DuplicateTenantError { id: 3, line: 4 };
        assert_eq!(data.exit_code(), 1);

        let reconcile = BillError::ReconciliationError {
            what: "shares".to_string(),
            expected: 1.0,
            actual: 0.9,
        };
        assert_eq!(reconcile.exit_code(), 3);
        assert_eq!(reconcile.category(), ErrorCategory::Calculation);
    }

    #[test]
    fn test_user_friendly_message_includes_detail() {
        let err = BillError::InvalidFieldError {
            line: 2,
            field: "id".to_string(),
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("The tenant file has a problem"));
        assert!(message.contains("line 2"));
    }
}
