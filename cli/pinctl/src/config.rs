//! CLI configuration (env-driven).

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::output::OutputFormat;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Configuration read from `PIN_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,

    /// Reference date used instead of today, if set.
    pub reference_date: Option<NaiveDate>,

    /// Default output format.
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("PIN_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_format = match lookup("PIN_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("PIN_LOG_FORMAT must be 'text' or 'json', got '{other}'."),
        };

        let reference_date = lookup("PIN_REFERENCE_DATE")
            .map(|v| v.parse::<NaiveDate>())
            .transpose()
            .context("PIN_REFERENCE_DATE must be a date (YYYY-MM-DD).")?;

        let output = match lookup("PIN_OUTPUT").as_deref() {
            None | Some("table") => OutputFormat::Table,
            Some("json") => OutputFormat::Json,
            Some(other) => anyhow::bail!("PIN_OUTPUT must be 'table' or 'json', got '{other}'."),
        };

        Ok(Self {
            log_level,
            log_format,
            reference_date,
            output,
        })
    }
}
