use crate::utils::error::Result;
use crate::utils::validation::validate_date_order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tenant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_in: NaiveDate,
    /// `None` while the tenant still lives in the house.
    pub move_out: Option<NaiveDate>,
    pub room: String,
    pub roommate: Option<u32>,
}

impl Tenant {
    pub fn is_current(&self) -> bool {
        self.move_out.is_none()
    }
}

/// Tenants keyed by id. Iteration is in ascending id order.
pub type TenantRoster = BTreeMap<u32, Tenant>;

/// Closed date interval covered by one utility bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        validate_date_order("bill.start/bill.end", start, end)?;
        Ok(Self { start, end })
    }

    /// Number of days in the period, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillSettings {
    pub period: BillingPeriod,
    pub bill_type: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillLine {
    pub tenant_id: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
    pub share: f64,
    pub amount_due: f64,
}

/// Output of the billable-days calculation: one line per tenant with any
/// overlap, plus the denominator for the share computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BillableDays {
    pub lines: BTreeMap<u32, BillLine>,
    pub total_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementEntry {
    pub name: String,
    pub room: String,
    #[serde(flatten)]
    pub line: BillLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub bill_type: String,
    pub period: BillingPeriod,
    pub total_amount: f64,
    pub total_days: u32,
    pub entries: Vec<StatementEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_billing_period_days_inclusive() {
        let period = BillingPeriod::new(date(2018, 10, 20), date(2018, 11, 19)).unwrap();
        assert_eq!(period.days(), 31);

        let single = BillingPeriod::new(date(2018, 10, 20), date(2018, 10, 20)).unwrap();
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn test_billing_period_rejects_reversed_dates() {
        assert!(BillingPeriod::new(date(2018, 11, 19), date(2018, 10, 20)).is_err());
    }

    #[test]
    fn test_billing_period_contains_boundaries() {
        let period = BillingPeriod::new(date(2018, 10, 20), date(2018, 11, 19)).unwrap();
        assert!(period.contains(date(2018, 10, 20)));
        assert!(period.contains(date(2018, 11, 19)));
        assert!(!period.contains(date(2018, 10, 19)));
        assert!(!period.contains(date(2018, 11, 20)));
    }
}
