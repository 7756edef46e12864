pub mod date_format;
pub mod error;
pub mod logger;
pub mod validation;
