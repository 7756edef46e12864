use crate::domain::model::{Tenant, TenantRoster};
use crate::domain::ports::TenantSource;
use crate::utils::date_format::parse_date;
use crate::utils::error::{BillError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const COLUMNS: [&str; 8] = [
    "id", "name", "email", "phone", "move_in", "move_out", "room", "roommate",
];

/// Tenant roster backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvTenantSource {
    path: PathBuf,
}

impl CsvTenantSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TenantSource for CsvTenantSource {
    fn load_tenants(&self) -> Result<TenantRoster> {
        tracing::debug!("Reading tenants from {}", self.path.display());
        let file = File::open(&self.path)?;
        read_tenants(BufReader::new(file))
    }
}

/// Reads a header row followed by one tenant per row. Any malformed row
/// fails the whole load.
pub fn read_tenants<R: Read>(reader: R) -> Result<TenantRoster> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut roster = TenantRoster::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let tenant = parse_tenant(&record, line)?;

        if roster.contains_key(&tenant.id) {
            return Err(BillError::DuplicateTenantError {
                id: tenant.id,
                line,
            });
        }
        roster.insert(tenant.id, tenant);
    }

    for tenant in roster.values() {
        if let Some(roommate) = tenant.roommate {
            if !roster.contains_key(&roommate) {
                tracing::warn!(
                    "Tenant {} ({}) lists roommate {} who is not in the tenant file",
                    tenant.id,
                    tenant.name,
                    roommate
                );
            }
        }
    }

    tracing::debug!("Loaded {} tenants", roster.len());
    Ok(roster)
}

fn parse_tenant(record: &StringRecord, line: u64) -> Result<Tenant> {
    if record.len() != COLUMNS.len() {
        return Err(BillError::InvalidFieldError {
            line,
            field: "row".to_string(),
            value: record.iter().collect::<Vec<_>>().join(","),
            reason: format!(
                "expected {} columns, found {}",
                COLUMNS.len(),
                record.len()
            ),
        });
    }

    let field = |index: usize| record.get(index).unwrap_or_default();

    let id = parse_id(field(0), "id", line)?;
    let move_in = parse_field_date(field(4), "move_in", line)?;
    let move_out = match field(5) {
        "" => None,
        raw => Some(parse_field_date(raw, "move_out", line)?),
    };
    let roommate = match field(7) {
        "" => None,
        raw => Some(parse_id(raw, "roommate", line)?),
    };

    if let Some(out) = move_out {
        if out < move_in {
            return Err(BillError::InconsistentTenancyError {
                id,
                message: format!("moved out on {} before moving in on {}", out, move_in),
            });
        }
    }

    Ok(Tenant {
        id,
        name: field(1).to_string(),
        email: field(2).to_string(),
        phone: field(3).to_string(),
        move_in,
        move_out,
        room: field(6).to_string(),
        roommate,
    })
}

fn parse_id(raw: &str, field: &str, line: u64) -> Result<u32> {
    raw.parse::<u32>()
        .map_err(|e| BillError::InvalidFieldError {
            line,
            field: field.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn parse_field_date(raw: &str, field: &str, line: u64) -> Result<NaiveDate> {
    parse_date(raw).map_err(|e| BillError::InvalidFieldError {
        line,
        field: field.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
