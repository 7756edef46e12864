use crate::domain::model::{BillLine, BillableDays, BillingPeriod};
use crate::utils::error::{BillError, Result};
use std::collections::BTreeMap;

/// Absolute tolerance used when reconciling shares and amounts.
pub const RECONCILIATION_TOLERANCE: f64 = 1e-6;

/// Fills in each line's share of the total days and the amount it owes.
///
/// `period` is only used to describe the failure when nobody was billable.
pub fn apportion(
    billable: &mut BillableDays,
    total_amount: f64,
    period: &BillingPeriod,
) -> Result<()> {
    if billable.total_days == 0 {
        return Err(BillError::ZeroBillableDaysError {
            start: period.start,
            end: period.end,
        });
    }

    let total_days = f64::from(billable.total_days);
    for line in billable.lines.values_mut() {
        line.share = f64::from(line.days) / total_days;
        line.amount_due = total_amount * line.share;
    }

    Ok(())
}

/// Checks that the amounts add up to the bill and the shares to 100%.
pub fn verify(lines: &BTreeMap<u32, BillLine>, total_amount: f64) -> Result<()> {
    let total_due: f64 = lines.values().map(|l| l.amount_due).sum();
    let total_share: f64 = lines.values().map(|l| l.share).sum();

    if (total_due - total_amount).abs() >= RECONCILIATION_TOLERANCE {
        return Err(BillError::ReconciliationError {
            what: "amounts due".to_string(),
            expected: total_amount,
            actual: total_due,
        });
    }

    if (total_share - 1.0).abs() >= RECONCILIATION_TOLERANCE {
        return Err(BillError::ReconciliationError {
            what: "tenant shares".to_string(),
            expected: 1.0,
            actual: total_share,
        });
    }

    Ok(())
}
