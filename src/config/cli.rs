use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigOverrides, RunConfig};
use crate::core::statement::OutputFormat;
use crate::utils::date_format::parse_cli_date;
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rent-split")]
#[command(about = "Split a utility bill among tenants by the days each one lived in the house")]
pub struct CliConfig {
    /// Path to a TOML bill file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tenant CSV file [default: ./resources/tenants.csv]
    #[arg(long)]
    pub tenants: Option<PathBuf>,

    /// First day of the billing period, e.g. "Oct 20, 2018"
    #[arg(long, value_parser = parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last day of the billing period (inclusive)
    #[arg(long, value_parser = parse_cli_date)]
    pub end: Option<NaiveDate>,

    /// Label printed on every statement, e.g. "PG&E"
    #[arg(long)]
    pub bill_type: Option<String>,

    /// Total bill amount
    #[arg(long)]
    pub amount: Option<f64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the statement here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tenants_path: self.tenants.clone(),
            bill_type: self.bill_type.clone(),
            start: self.start,
            end: self.end,
            total_amount: self.amount,
            format: self.format,
            output_path: self.output.clone(),
        }
    }

    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    pub fn resolve(&self, file: &TomlConfig) -> Result<RunConfig> {
        RunConfig::resolve(file, &self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::try_parse_from([
            "rent-split",
            "--start",
            "Oct 20, 2018",
            "--end",
            "Nov 19, 2018",
            "--bill-type",
            "PG&E",
            "--amount",
            "72.28",
            "--format",
            "json",
        ])
        .unwrap();

        let config = cli.resolve(&TomlConfig::default()).unwrap();
        assert_eq!(config.settings.period.days(), 31);
        assert_eq!(config.settings.bill_type, "PG&E");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_date_flag_is_rejected_by_parser() {
        let result = CliConfig::try_parse_from(["rent-split", "--start", "2018-10-20"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_config_file_gives_empty_config() {
        let cli = CliConfig::try_parse_from(["rent-split"]).unwrap();
        let file = cli.load_file().unwrap();
        assert!(file.bill.total.is_none());
    }
}
