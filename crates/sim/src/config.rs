//! Environment-driven configuration for the simulation binary.

use std::path::PathBuf;

use thiserror::Error;

use restopos_observability::{LogFormat, UnknownLogFormat};

pub const DATA_DIR_VAR: &str = "RESTOPOS_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "RESTOPOS_LOG_FORMAT";

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    LogFormat {
        var: &'static str,
        #[source]
        source: UnknownLogFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory holding `menu_items.csv`, `staff_roles.csv` and `tables.csv`.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    /// Variables that were unset and fell back to defaults.
    pub defaulted: Vec<&'static str>,
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the
    /// process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaulted = Vec::new();

        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                defaulted.push(DATA_DIR_VAR);
                PathBuf::from(DEFAULT_DATA_DIR)
            }
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|source| ConfigError::LogFormat {
                var: LOG_FORMAT_VAR,
                source,
            })?,
            None => {
                defaulted.push(LOG_FORMAT_VAR);
                LogFormat::default()
            }
        };

        Ok(Self {
            data_dir,
            log_format,
            defaulted,
        })
    }
}
