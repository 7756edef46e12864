use crate::core::billable_days::find_billable_tenant_days;
use crate::core::shares::{apportion, verify};
use crate::core::TenantSource;
use crate::domain::model::{BillSettings, Statement, StatementEntry};
use crate::utils::error::Result;

pub struct BillingEngine<S: TenantSource> {
    source: S,
    settings: BillSettings,
}

impl<S: TenantSource> BillingEngine<S> {
    pub fn new(source: S, settings: BillSettings) -> Self {
        Self { source, settings }
    }

    /// Loads the tenants, splits the bill and reconciles it. Nothing is
    /// returned unless every line reconciles.
    pub fn run(&self) -> Result<Statement> {
        let period = &self.settings.period;
        tracing::info!(
            "Splitting {} bill of {:.2} for {} to {}",
            self.settings.bill_type,
            self.settings.total_amount,
            period.start,
            period.end
        );

        let tenants = self.source.load_tenants()?;
        tracing::info!("Loaded {} tenants", tenants.len());

        let mut billable = find_billable_tenant_days(&tenants, period)?;
        tracing::info!(
            "{} tenants billable for {} tenant days",
            billable.lines.len(),
            billable.total_days
        );

        apportion(&mut billable, self.settings.total_amount, period)?;
        verify(&billable.lines, self.settings.total_amount)?;
        tracing::info!("Shares reconciled");

        let entries = billable
            .lines
            .into_values()
            .map(|line| {
                let (name, room) = tenants
                    .get(&line.tenant_id)
                    .map(|t| (t.name.clone(), t.room.clone()))
                    .unwrap_or_default();
                StatementEntry { name, room, line }
            })
            .collect();

        Ok(Statement {
            bill_type: self.settings.bill_type.clone(),
            period: *period,
            total_amount: self.settings.total_amount,
            total_days: billable.total_days,
            entries,
        })
    }
}
