use chrono::NaiveDate;

/// Human-readable date format shared by the tenant file, the config file and
/// the text statement, e.g. `Oct 20, 2018`.
pub const DATE_FORMAT: &str = "%b %e, %Y";

pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `value_parser` for command-line date flags.
pub fn parse_cli_date(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value)
        .map_err(|e| format!("expected a date like \"Oct 20, 2018\", got '{}': {}", value, e))
}
