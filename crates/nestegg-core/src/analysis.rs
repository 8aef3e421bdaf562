//! Goal analysis value model
//!
//! A [`GoalAnalysis`] is computed fresh from caller-supplied [`GoalInputs`]
//! and is never mutated afterwards. `percentage`, `status` and `shortfall`
//! are always derived from the same `projected_amount` / `target_amount` pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::projection;

/// Whether a projection meets its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// Projection reaches at least 100% of target
    Achievable,
    /// Projection reaches 60% to 100% of target
    Partially,
    /// Projection reaches less than 60% of target
    NotAchievable,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Achievable => "achievable",
            GoalStatus::Partially => "partially",
            GoalStatus::NotAchievable => "not-achievable",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Achievable => "Achievable",
            GoalStatus::Partially => "Partially Achievable",
            GoalStatus::NotAchievable => "Not Achievable",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "achievable" => Ok(GoalStatus::Achievable),
            "partially" => Ok(GoalStatus::Partially),
            "not-achievable" => Ok(GoalStatus::NotAchievable),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

/// Caller-supplied inputs for a goal analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInputs {
    /// Principal at t=0
    pub current_savings: f64,
    /// Amount added at the end of each month
    pub monthly_contribution: f64,
    /// Annual return as a percentage (7.0 = 7%)
    pub annual_rate: f64,
    /// Inflation/appreciation-adjusted price of the goal
    pub target_amount: f64,
    /// Horizon in years
    pub years: f64,
}

impl GoalInputs {
    /// Reject inputs for which percentage and status are meaningless
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("current savings", self.current_savings),
            ("monthly contribution", self.monthly_contribution),
            ("annual rate", self.annual_rate),
            ("target amount", self.target_amount),
            ("years", self.years),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!("{} must be a finite number", name)));
            }
        }

        if self.target_amount <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "target amount must be positive (got {})",
                self.target_amount
            )));
        }
        if self.current_savings < 0.0 {
            return Err(Error::InvalidInput(format!(
                "current savings cannot be negative (got {})",
                self.current_savings
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(Error::InvalidInput(format!(
                "monthly contribution cannot be negative (got {})",
                self.monthly_contribution
            )));
        }
        if self.years <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "years must be positive (got {})",
                self.years
            )));
        }

        Ok(())
    }
}

/// Result of projecting savings against a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalysis {
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub annual_rate: f64,
    pub target_amount: f64,
    pub years: f64,
    pub projected_amount: f64,
    pub status: GoalStatus,
    /// Projected amount as a share of target, clamped to [0, 100]
    pub percentage: f64,
    /// Target minus projection (negative = surplus)
    pub shortfall: f64,
}

impl GoalAnalysis {
    /// Validate the inputs and project savings over the goal horizon
    pub fn compute(inputs: &GoalInputs) -> Result<Self> {
        inputs.validate()?;

        let projected = projection::future_value_with_contributions(
            inputs.current_savings,
            inputs.monthly_contribution,
            inputs.annual_rate,
            inputs.years,
        );

        Ok(Self::derive(inputs, projected))
    }

    /// Build an analysis around a projection computed elsewhere
    pub fn from_projection(inputs: &GoalInputs, projected_amount: f64) -> Result<Self> {
        inputs.validate()?;
        if !projected_amount.is_finite() {
            return Err(Error::InvalidInput(
                "projected amount must be a finite number".to_string(),
            ));
        }
        Ok(Self::derive(inputs, projected_amount))
    }

    fn derive(inputs: &GoalInputs, projected_amount: f64) -> Self {
        let target = inputs.target_amount;
        Self {
            current_savings: inputs.current_savings,
            monthly_contribution: inputs.monthly_contribution,
            annual_rate: inputs.annual_rate,
            target_amount: target,
            years: inputs.years,
            projected_amount,
            status: projection::determine_goal_status(projected_amount, target),
            percentage: projection::goal_percentage(projected_amount, target),
            shortfall: projection::shortfall(projected_amount, target),
        }
    }

    /// The inputs this analysis was computed from
    pub fn inputs(&self) -> GoalInputs {
        GoalInputs {
            current_savings: self.current_savings,
            monthly_contribution: self.monthly_contribution,
            annual_rate: self.annual_rate,
            target_amount: self.target_amount,
            years: self.years,
        }
    }

    pub fn is_achievable(&self) -> bool {
        self.status == GoalStatus::Achievable
    }

    /// Amount by which the projection exceeds the target, if any
    pub fn surplus(&self) -> Option<f64> {
        (self.shortfall < 0.0).then(|| -self.shortfall)
    }
}
