use crate::domain::model::{BillLine, BillableDays, BillingPeriod, TenantRoster};
use crate::utils::error::{BillError, Result};
use std::collections::BTreeMap;

/// Clips every tenant's residency to the billing period and counts the
/// overlapping days, both ends included.
///
/// Tenants with no overlap get no line. Share and amount are left at zero
/// until [`crate::core::shares::apportion`] fills them in.
pub fn find_billable_tenant_days(
    tenants: &TenantRoster,
    period: &BillingPeriod,
) -> Result<BillableDays> {
    let mut lines = BTreeMap::new();
    let mut total_days: u32 = 0;

    for tenant in tenants.values() {
        if let Some(out) = tenant.move_out {
            if out < period.start {
                tracing::debug!(
                    "Skipping tenant {} ({}): moved out {} before the period",
                    tenant.id,
                    tenant.name,
                    out
                );
                continue;
            }
        }

        if tenant.move_in > period.end {
            tracing::debug!(
                "Skipping tenant {} ({}): moves in {} after the period",
                tenant.id,
                tenant.name,
                tenant.move_in
            );
            continue;
        }

        let start = period.start.max(tenant.move_in);
        let end = match tenant.move_out {
            Some(out) if out < period.end => out,
            _ => period.end,
        };

        if start > end {
            return Err(BillError::InconsistentTenancyError {
                id: tenant.id,
                message: format!("billable start {} is after billable end {}", start, end),
            });
        }

        let days = u32::try_from((end - start).num_days() + 1).map_err(|_| {
            BillError::InconsistentTenancyError {
                id: tenant.id,
                message: format!("day count between {} and {} is out of range", start, end),
            }
        })?;

        tracing::debug!(
            "Tenant {} ({}): {} to {} = {} days",
            tenant.id,
            tenant.name,
            start,
            end,
            days
        );

        lines.insert(
            tenant.id,
            BillLine {
                tenant_id: tenant.id,
                start,
                end,
                days,
                share: 0.0,
                amount_due: 0.0,
            },
        );
        total_days = total_days
            .checked_add(days)
            .ok_or(BillError::DayCountOverflowError {
                start: period.start,
                end: period.end,
            })?;
    }

    Ok(BillableDays { lines, total_days })
}
