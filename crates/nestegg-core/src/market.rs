//! Market data for asset price estimates
//!
//! The projection engine never reads market data itself. Callers hold a
//! [`MarketDataSource`] and pass the looked-up estimate into the planner.
//! [`MarketTable`] is the read-only table implementation, loaded from the
//! market config (see [`crate::config`]).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Key of the table entry used for unlisted locations
pub const DEFAULT_LOCATION_KEY: &str = "default";

/// Kinds of asset a savings goal can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Car,
    Flat,
    House,
    Land,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Car => "car",
            AssetType::Flat => "flat",
            AssetType::House => "house",
            AssetType::Land => "land",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Car => "Car",
            AssetType::Flat => "Flat/Apartment",
            AssetType::House => "House",
            AssetType::Land => "Land",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AssetType::Car => "Personal vehicle for transportation",
            AssetType::Flat => "Apartment or flat in a residential complex",
            AssetType::House => "Independent house with land",
            AssetType::Land => "Plot of land for investment or construction",
        }
    }

    pub fn all() -> &'static [AssetType] {
        &[
            AssetType::Car,
            AssetType::Flat,
            AssetType::House,
            AssetType::Land,
        ]
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(AssetType::Car),
            "flat" | "apartment" => Ok(AssetType::Flat),
            "house" => Ok(AssetType::House),
            "land" => Ok(AssetType::Land),
            _ => Err(format!(
                "Unknown asset type: {}. Available: car, flat, house, land",
                s
            )),
        }
    }
}

/// Observed price band for an asset in a location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Annual appreciation (negative = depreciation) per asset type, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppreciationRates {
    pub car: f64,
    pub flat: f64,
    pub house: f64,
    pub land: f64,
}

impl AppreciationRates {
    pub fn for_asset(&self, asset: AssetType) -> f64 {
        match asset {
            AssetType::Car => self.car,
            AssetType::Flat => self.flat,
            AssetType::House => self.house,
            AssetType::Land => self.land,
        }
    }
}

/// One location's row in the market table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Lowercase lookup key
    pub key: String,
    pub city: String,
    pub country: String,
    pub car: PriceRange,
    pub flat: PriceRange,
    pub house: PriceRange,
    /// Per square foot
    pub land: PriceRange,
    pub appreciation: AppreciationRates,
}

impl LocationData {
    pub fn price_for(&self, asset: AssetType) -> PriceRange {
        match asset {
            AssetType::Car => self.car,
            AssetType::Flat => self.flat,
            AssetType::House => self.house,
            AssetType::Land => self.land,
        }
    }
}

/// Result of a market lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub asset_type: AssetType,
    /// City of the matched entry ("Other" when falling back to the default)
    pub location: String,
    pub price: PriceRange,
    /// Annual percentage
    pub appreciation_rate: f64,
}

/// Read-only source of asset price estimates
pub trait MarketDataSource {
    /// Estimate for an asset type in a location
    fn lookup(&self, asset: AssetType, location: &str) -> Result<PriceEstimate>;

    /// Display names of the known locations
    fn locations(&self) -> Vec<String>;
}

/// Static market table keyed by normalised location
#[derive(Debug, Clone, PartialEq)]
pub struct MarketTable {
    entries: Vec<LocationData>,
}

impl MarketTable {
    /// Build a table, rejecting duplicate keys and unusable prices
    pub fn new(entries: Vec<LocationData>) -> Result<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            let key = normalize_location(&entry.key);
            if key.is_empty() {
                return Err(Error::Config(format!(
                    "Location '{}' has an empty key",
                    entry.city
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(Error::Config(format!("Duplicate location key: {}", key)));
            }

            for asset in AssetType::all() {
                let price = entry.price_for(*asset);
                if price.avg <= 0.0 || price.min < 0.0 || price.max < price.min {
                    return Err(Error::Config(format!(
                        "Invalid {} price range for {}",
                        asset, entry.city
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LocationData] {
        &self.entries
    }

    /// Entry for a location, falling back to the default entry
    pub fn location_data(&self, location: &str) -> Result<&LocationData> {
        let wanted = normalize_location(location);

        self.find(&wanted)
            .or_else(|| {
                tracing::debug!(location = %location, "Unknown location, using default market data");
                self.find(DEFAULT_LOCATION_KEY)
            })
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "No market data for '{}' and no default entry",
                    location
                ))
            })
    }

    fn find(&self, key: &str) -> Option<&LocationData> {
        self.entries
            .iter()
            .find(|e| normalize_location(&e.key) == key || normalize_location(&e.city) == key)
    }
}

impl MarketDataSource for MarketTable {
    fn lookup(&self, asset: AssetType, location: &str) -> Result<PriceEstimate> {
        let data = self.location_data(location)?;

        Ok(PriceEstimate {
            asset_type: asset,
            location: data.city.clone(),
            price: data.price_for(asset),
            appreciation_rate: data.appreciation.for_asset(asset),
        })
    }

    fn locations(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| normalize_location(&e.key) != DEFAULT_LOCATION_KEY)
            .map(|e| e.city.clone())
            .collect()
    }
}

/// Lowercase and trim a location for lookup
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}
