// src/config.rs
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::{env, path::PathBuf};

pub const DEFAULT_DATA: &str = ".";
pub const DEFAULT_OUT_DIR: &str = "public/fragments";
pub const DEFAULT_AUTHOR: &str = "David Cohen";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// `CAMPAGNE_DATA`: base URL or directory holding `data/*.csv`.
    pub data: String,
    /// `CAMPAGNE_OUT`: where fragments and `site.json` are written.
    pub out_dir: PathBuf,
    /// `CAMPAGNE_AUTHOR`: author shown on posts without `auteur`.
    pub author: String,
    /// `CAMPAGNE_TODAY`: pins "today" (`YYYY-MM-DD`) for previews.
    pub today: Option<NaiveDate>,
    /// `LOG_LEVEL`: default directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            author: DEFAULT_AUTHOR.to_string(),
            today: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let today = match get("CAMPAGNE_TODAY") {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("parsing CAMPAGNE_TODAY={:?}", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            data: get("CAMPAGNE_DATA").unwrap_or(defaults.data),
            out_dir: get("CAMPAGNE_OUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            author: get("CAMPAGNE_AUTHOR").unwrap_or(defaults.author),
            today,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// The pinned date, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
