use crate::core::statement::OutputFormat;
use crate::utils::error::{BillError, Result};
use crate::utils::validation::{validate_amount, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bill file layout. Every field is optional so the command line can fill in
/// or override any of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub bill: BillSection,
    #[serde(default)]
    pub tenants: TenantsSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillSection {
    pub r#type: Option<String>,
    /// Same format as the tenant file, e.g. "Oct 20, 2018".
    pub start: Option<String>,
    pub end: Option<String>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantsSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BillError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BILL_TOTAL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BillError::ConfigParseError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(bill_type) = &self.bill.r#type {
            validate_non_empty_string("bill.type", bill_type)?;
        }

        if let Some(total) = self.bill.total {
            validate_amount("bill.total", total)?;
        }

        if let Some(path) = &self.tenants.path {
            validate_non_empty_string("tenants.path", path)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[bill]
type = "PG&E"
start = "Oct 20, 2018"
end = "Nov 19, 2018"
total = 72.28

[tenants]
path = "./resources/tenants.csv"

[output]
format = "json"
path = "./out/statement.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bill.r#type.as_deref(), Some("PG&E"));
        assert_eq!(config.bill.start.as_deref(), Some("Oct 20, 2018"));
        assert_eq!(config.bill.total, Some(72.28));
        assert_eq!(config.tenants.path.as_deref(), Some("./resources/tenants.csv"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[bill]\ntotal = 10.0\n").unwrap();
        assert_eq!(config.bill.total, Some(10.0));
        assert!(config.tenants.path.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RENT_SPLIT_TEST_BILL_TYPE", "Water");

        let config =
            TomlConfig::from_toml_str("[bill]\ntype = \"${RENT_SPLIT_TEST_BILL_TYPE}\"\n").unwrap();
        assert_eq!(config.bill.r#type.as_deref(), Some("Water"));

        std::env::remove_var("RENT_SPLIT_TEST_BILL_TYPE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[bill]\ntype = \"${RENT_SPLIT_SURELY_UNSET}\"\n").unwrap();
        assert_eq!(
            config.bill.r#type.as_deref(),
            Some("${RENT_SPLIT_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[bill\ntotal = 1"),
            Err(BillError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[bill]\ntotal = -5.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[bill]\ntype = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bill]\ntype = \"PG&E\"\ntotal = 72.28\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bill.r#type.as_deref(), Some("PG&E"));
    }
}
