//! Runtime configuration read from the environment.
//!
//! `.env` is loaded by the caller (`dotenvy`) before [`Config::from_env`] runs.
//! Command-line flags take precedence over anything resolved here.

use std::env;
use std::path::PathBuf;

use crate::pipeline::Sources;

pub const DEFAULT_DAILY_CSV: &str = "data/day.csv";
pub const DEFAULT_LOG_FILE: &str = "logs/bike_share_insights.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `BIKE_DAILY_CSV`
    pub daily_csv: PathBuf,
    /// `BIKE_HOURLY_CSV`; hourly views are produced only when set.
    pub hourly_csv: Option<PathBuf>,
    /// `LOG_FILE_PATH`
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            daily_csv: get("BIKE_DAILY_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DAILY_CSV)),
            hourly_csv: get("BIKE_HOURLY_CSV").map(PathBuf::from),
            log_file: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, daily: Option<PathBuf>, hourly: Option<PathBuf>) -> Self {
        if let Some(daily) = daily {
            self.daily_csv = daily;
        }
        if hourly.is_some() {
            self.hourly_csv = hourly;
        }
        self
    }

    pub fn sources(&self) -> Sources {
        Sources {
            daily: self.daily_csv.clone(),
            hourly: self.hourly_csv.clone(),
        }
    }
}
