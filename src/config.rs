//! Configuration management for the contact book binary.
//!
//! This module handles loading and validating configuration from environment
//! variables. The library itself reads no environment; only `main` does.

use crate::directory::DEFAULT_BATCH_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Snapshot file used when `CONTACT_BOOK_PATH` is unset.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file to load (default: "address_book.json")
    pub book_path: PathBuf,

    /// Records printed per page (default: 1)
    pub page_size: usize,

    /// Look-ahead window for upcoming birthdays in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Snapshot file (default: "address_book.json")
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page, > 0 (default: 1)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", DEFAULT_BATCH_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let birthday_window_days = Self::parse_env_u16("BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            page_size,
            birthday_window_days: i64::from(birthday_window_days),
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: DEFAULT_BATCH_SIZE,
            birthday_window_days: 7,
            log_level: "warn".to_string(),
        }
    }
}
