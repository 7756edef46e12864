use crate::domain::model::Statement;
use crate::utils::date_format::format_date;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(statement: &Statement, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(statement)),
        OutputFormat::Json => render_json(statement),
    }
}

/// One block per tenant, separated by blank lines.
pub fn render_text(statement: &Statement) -> String {
    let mut out = String::new();
    for entry in &statement.entries {
        let line = &entry.line;
        out.push_str(&format!(
            "Name: {}\n\
             Bill type: {}\n\
             Start date (inclusive): {}\n\
             End date (inclusive): {}\n\
             # of days: {}\n\
             Percent of bill: {:.2}%\n\
             Amount due: ${:.2}\n\n",
            entry.name,
            statement.bill_type,
            format_date(line.start),
            format_date(line.end),
            line.days,
            line.share * 100.0,
            line.amount_due
        ));
    }
    out
}

pub fn render_json(statement: &Statement) -> Result<String> {
    let mut json = serde_json::to_string_pretty(statement)?;
    json.push('\n');
    Ok(json)
}

/// Writes the rendered statement to `output`, or to stdout when no path is
/// given.
pub fn write_statement(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)?;
            tracing::info!("Statement written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
