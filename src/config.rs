use crate::errors::ConfigError;
use std::{env, path::PathBuf, str::FromStr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/store.json";

/// Day counts below which an expiring product raises an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertThresholds {
    pub critical_days: i64,
    pub warning_days: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical_days: 7,
            warning_days: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub thresholds: AlertThresholds,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AlertThresholds::default();
        let thresholds = AlertThresholds {
            critical_days: parse_or(&lookup, "CRITICAL_DAYS", defaults.critical_days)?,
            warning_days: parse_or(&lookup, "WARNING_DAYS", defaults.warning_days)?,
        };
        if thresholds.critical_days > thresholds.warning_days {
            warn!(
                critical_days = thresholds.critical_days,
                warning_days = thresholds.warning_days,
                "CRITICAL_DAYS exceeds WARNING_DAYS, no alert will be tagged Warning"
            );
        }

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            data_path: lookup("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            thresholds,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
        None => Ok(default),
    }
}
