use crate::utils::error::{BillError, Result};
use chrono::NaiveDate;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();
    if display.is_empty() {
        return Err(BillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(BillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_date_order(field_name: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(BillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} .. {}", start, end),
            reason: "Start date must not be after end date".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| BillError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("bill.total", 72.28).is_ok());
        assert!(validate_amount("bill.total", 0.0).is_ok());
        assert!(validate_amount("bill.total", -1.0).is_err());
        assert!(validate_amount("bill.total", f64::NAN).is_err());
        assert!(validate_amount("bill.total", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let oct = NaiveDate::from_ymd_opt(2018, 10, 20).unwrap();
        let nov = NaiveDate::from_ymd_opt(2018, 11, 19).unwrap();
        assert!(validate_date_order("bill", oct, nov).is_ok());
        assert!(validate_date_order("bill", oct, oct).is_ok());
        assert!(validate_date_order("bill", nov, oct).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bill.type", "PG&E").is_ok());
        assert!(validate_non_empty_string("bill.type", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("bill.total", Some(5)).unwrap(), 5);
        let missing: Option<u32> = None;
        match validate_required_field("bill.total", missing) {
            Err(BillError::MissingConfigError { field }) => assert_eq!(field, "bill.total"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("tenants.path", Path::new("resources/tenants.csv")).is_ok());
        assert!(validate_path("tenants.path", Path::new("")).is_err());
    }
}
