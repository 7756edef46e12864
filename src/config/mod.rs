#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::statement::OutputFormat;
use crate::domain::model::{BillSettings, BillingPeriod};
use crate::utils::date_format::parse_date;
use crate::utils::error::{BillError, Result};
use crate::utils::validation::{
    validate_amount, validate_non_empty_string, validate_path, validate_required_field, Validate,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_TENANTS_PATH: &str = "./resources/tenants.csv";

/// Values given on the command line. Each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tenants_path: Option<PathBuf>,
    pub bill_type: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub total_amount: Option<f64>,
    pub format: Option<OutputFormat>,
    pub output_path: Option<PathBuf>,
}

/// Everything one run needs, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub tenants_path: PathBuf,
    pub settings: BillSettings,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn resolve(file: &TomlConfig, overrides: &ConfigOverrides) -> Result<Self> {
        file.validate()?;

        let bill_type = validate_required_field(
            "bill.type",
            overrides
                .bill_type
                .clone()
                .or_else(|| file.bill.r#type.clone()),
        )?;
        let start = validate_required_field(
            "bill.start",
            overrides
                .start
                .map(Ok)
                .or_else(|| file.bill.start.as_deref().map(|s| file_date("bill.start", s)))
                .transpose()?,
        )?;
        let end = validate_required_field(
            "bill.end",
            overrides
                .end
                .map(Ok)
                .or_else(|| file.bill.end.as_deref().map(|s| file_date("bill.end", s)))
                .transpose()?,
        )?;
        let total_amount = validate_required_field(
            "bill.total",
            overrides.total_amount.or(file.bill.total),
        )?;

        let tenants_path = overrides
            .tenants_path
            .clone()
            .or_else(|| file.tenants.path.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TENANTS_PATH));

        let format = overrides.format.or(file.output.format).unwrap_or_default();
        let output_path = overrides
            .output_path
            .clone()
            .or_else(|| file.output.path.as_ref().map(PathBuf::from));

        let config = Self {
            tenants_path,
            settings: BillSettings {
                period: BillingPeriod::new(start, end)?,
                bill_type,
                total_amount,
            },
            format,
            output_path,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("tenants.path", &self.tenants_path)?;
        if let Some(output) = &self.output_path {
            validate_path("output.path", output)?;
        }
        validate_non_empty_string("bill.type", &self.settings.bill_type)?;
        validate_amount("bill.total", self.settings.total_amount)?;
        Ok(())
    }
}

fn file_date(field: &str, raw: &str) -> Result<NaiveDate> {
    parse_date(raw).map_err(|e| BillError::InvalidConfigValueError {
        field: field.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
