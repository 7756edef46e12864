use crate::domain::model::TenantRoster;
use crate::utils::error::Result;

/// Anything the engine can load the tenant roster from.
pub trait TenantSource {
    fn load_tenants(&self) -> Result<TenantRoster>;
}

impl TenantSource for TenantRoster {
    fn load_tenants(&self) -> Result<TenantRoster> {
        Ok(self.clone())
    }
}
