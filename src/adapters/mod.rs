// Adapters layer: concrete implementations for external systems.

pub mod csv_tenants;
