//! Asset purchase planning
//!
//! Ties a market estimate to the projection engine: the asset's current price
//! is grown by its appreciation rate to get the target, savings are projected
//! over the same horizon, and recommendations are generated from the result.

use serde::{Deserialize, Serialize};

use crate::analysis::{GoalAnalysis, GoalInputs};
use crate::error::{Error, Result};
use crate::market::{AssetType, MarketDataSource, PriceEstimate};
use crate::projection;
use crate::recommendations::{generate_recommendations, Recommendation};

/// Longest planning horizon accepted, in years
pub const MAX_PLAN_YEARS: u32 = 30;

/// Highest expected annual return accepted, in percent
pub const MAX_ANNUAL_RATE: f64 = 20.0;

/// Values used when the caller leaves a planning input unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerDefaults {
    /// Expected annual return on savings (fixed deposit rate)
    pub annual_rate: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub location: String,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            annual_rate: 7.0,
            monthly_contribution: 10_000.0,
            years: 5,
            location: "Mumbai".to_string(),
        }
    }
}

/// A request to plan the purchase of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub asset_type: AssetType,
    pub location: String,
    pub years: u32,
    pub monthly_contribution: f64,
    pub current_savings: f64,
    pub annual_rate: f64,
    /// Overrides the market average as today's price
    pub custom_price: Option<f64>,
}

impl PlanRequest {
    /// Request with every optional input taken from `defaults`
    pub fn with_defaults(
        asset_type: AssetType,
        current_savings: f64,
        defaults: &PlannerDefaults,
    ) -> Self {
        Self {
            asset_type,
            location: defaults.location.clone(),
            years: defaults.years,
            monthly_contribution: defaults.monthly_contribution,
            current_savings,
            annual_rate: defaults.annual_rate,
            custom_price: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.years == 0 || self.years > MAX_PLAN_YEARS {
            return Err(Error::InvalidInput(format!(
                "years must be between 1 and {} (got {})",
                MAX_PLAN_YEARS, self.years
            )));
        }
        if !(0.0..=MAX_ANNUAL_RATE).contains(&self.annual_rate) {
            return Err(Error::InvalidInput(format!(
                "annual rate must be between 0 and {}% (got {})",
                MAX_ANNUAL_RATE, self.annual_rate
            )));
        }
        if !(self.monthly_contribution >= 0.0 && self.monthly_contribution.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "monthly contribution cannot be negative (got {})",
                self.monthly_contribution
            )));
        }
        if !(self.current_savings >= 0.0 && self.current_savings.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "current savings cannot be negative (got {})",
                self.current_savings
            )));
        }
        if let Some(price) = self.custom_price {
            if !(price > 0.0 && price.is_finite()) {
                return Err(Error::InvalidInput(format!(
                    "custom price must be positive (got {})",
                    price
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of planning an asset purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPlan {
    pub estimate: PriceEstimate,
    /// Today's price (custom price or market average)
    pub current_price: f64,
    /// Price after appreciation over the horizon
    pub target_price: f64,
    pub analysis: GoalAnalysis,
    pub recommendations: Vec<Recommendation>,
}

/// Plan the purchase of an asset from savings
pub fn plan_purchase(market: &dyn MarketDataSource, request: &PlanRequest) -> Result<AssetPlan> {
    request.validate()?;

    let estimate = market.lookup(request.asset_type, &request.location)?;
    let current_price = request.custom_price.unwrap_or(estimate.price.avg);
    let years = f64::from(request.years);

    let target_price =
        projection::future_asset_price(current_price, estimate.appreciation_rate, years);

    tracing::debug!(
        asset = request.asset_type.as_str(),
        location = %estimate.location,
        current_price,
        target_price,
        appreciation = estimate.appreciation_rate,
        "Resolved target price"
    );

    let analysis = GoalAnalysis::compute(&GoalInputs {
        current_savings: request.current_savings,
        monthly_contribution: request.monthly_contribution,
        annual_rate: request.annual_rate,
        target_amount: target_price,
        years,
    })?;
    let recommendations = generate_recommendations(&analysis);

    tracing::info!(
        asset = request.asset_type.as_str(),
        status = analysis.status.as_str(),
        percentage = analysis.percentage,
        recommendations = recommendations.len(),
        "Planned asset purchase"
    );

    Ok(AssetPlan {
        estimate,
        current_price,
        target_price,
        analysis,
        recommendations,
    })
}
