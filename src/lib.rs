pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_tenants::CsvTenantSource;
pub use config::{ConfigOverrides, RunConfig};
pub use core::{engine::BillingEngine, statement::OutputFormat};
pub use domain::model::{BillLine, BillSettings, BillingPeriod, Statement, Tenant, TenantRoster};
pub use utils::error::{BillError, Result};
