pub mod billable_days;
pub mod engine;
pub mod shares;
pub mod statement;

pub use crate::domain::model::{BillLine, BillSettings, BillableDays, Statement};
pub use crate::domain::ports::TenantSource;
pub use crate::utils::error::Result;
