//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. In-memory storage is used when absent.
    pub database_url: Option<String>,

    /// Maximum database connections in pool
    pub database_max_connections: u32,

    /// Table holding transactions
    pub table_name: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Page size for listing when the request gives none
    pub default_page_size: u32,

    /// Upper bound for a requested page size
    pub max_page_size: u32,

    /// Page size used internally while summing a month
    pub balance_page_size: u32,

    /// `json` for structured logs, anything else for plain text
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 10)?;

        let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "transactions".to_string());
        if !is_sql_identifier(&table_name) {
            return Err(ConfigError::InvalidValue("TABLE_NAME"));
        }

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", 3000)?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let default_page_size = parse_positive("DEFAULT_PAGE_SIZE", 10)?;
        let max_page_size = parse_positive("MAX_PAGE_SIZE", 1000)?;
        let balance_page_size = parse_positive("BALANCE_PAGE_SIZE", 100)?;

        if default_page_size > max_page_size {
            return Err(ConfigError::InvalidValue("DEFAULT_PAGE_SIZE"));
        }

        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            table_name,
            host,
            port,
            environment,
            default_page_size,
            max_page_size,
            balance_page_size,
            log_format,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if structured JSON logs were requested
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue(name)),
        Err(_) => Ok(default),
    }
}

fn parse_positive(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match parse_var(name, default)? {
        0 => Err(ConfigError::InvalidValue(name)),
        value => Ok(value),
    }
}

/// Plain identifier: letters, digits and underscores, not starting with a digit
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_identifier() {
        assert!(is_sql_identifier("transactions"));
        assert!(is_sql_identifier("_tx_2025"));
        assert!(!is_sql_identifier(""));
        assert!(!is_sql_identifier("2025_tx"));
        assert!(!is_sql_identifier("tx; DROP TABLE users"));
        assert!(!is_sql_identifier("public.transactions"));
    }

    #[test]
    fn test_parse_var_default_when_unset() {
        let value: u32 = parse_var("TXN_BALANCE_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
