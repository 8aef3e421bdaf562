//! Market data and planner defaults configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/nestegg/config/market.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! An override file may omit either section; the missing one comes from the
//! embedded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::market::{LocationData, MarketTable};
use crate::planner::PlannerDefaults;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/market.toml");

/// Loaded configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: PlannerDefaults,
    pub market: MarketTable,
    /// File the config was read from (None = embedded)
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path, the default override path, or the embedded config
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                tracing::debug!(path = %path.display(), "Loaded market config override");
                let mut config = parse_config(&content)?;
                config.source = Some(path);
                Ok(config)
            }
            None => Self::builtin(),
        }
    }

    /// The embedded configuration
    pub fn builtin() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("nestegg").join("config").join("market.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    defaults: Option<RawDefaults>,
    locations: Option<Vec<LocationData>>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    annual_rate: Option<f64>,
    monthly_contribution: Option<f64>,
    years: Option<u32>,
    location: Option<String>,
}

fn parse_raw(content: &str) -> Result<RawConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid market config TOML: {}", e)))
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<Config> {
    let raw = parse_raw(content)?;

    let mut defaults = PlannerDefaults::default();
    if let Some(raw_defaults) = raw.defaults {
        if let Some(rate) = raw_defaults.annual_rate {
            defaults.annual_rate = rate;
        }
        if let Some(monthly) = raw_defaults.monthly_contribution {
            defaults.monthly_contribution = monthly;
        }
        if let Some(years) = raw_defaults.years {
            defaults.years = years;
        }
        if let Some(location) = raw_defaults.location {
            defaults.location = location;
        }
    }

    let locations = match raw.locations {
        Some(locations) => locations,
        None => parse_raw(DEFAULT_CONFIG)?.locations.ok_or_else(|| {
            Error::Config("Embedded market config has no locations".to_string())
        })?,
    };

    Ok(Config {
        defaults,
        market: MarketTable::new(locations)?,
        source: None,
    })
}
