//! Recommendation Generator
//!
//! Turns a completed [`GoalAnalysis`] into an ordered list of suggestions:
//!
//! 1. **Increase savings** - contribute more each month (high priority)
//! 2. **Extend timeline** - give the goal a few more years (medium)
//! 3. **Improve returns** - move savings to a higher-yield instrument (medium)
//! 4. **Reduce target** - consider a cheaper alternative (low)
//!
//! The list is emitted in that fixed order and never re-sorted by priority.
//! An achievable goal gets a single congratulatory entry instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::GoalAnalysis;
use crate::projection;

/// Largest ask surfaced, as a multiple of the current contribution or horizon
pub const REASONABLE_ASK_MULTIPLIER: f64 = 2.0;

/// Percentage points added to the current rate for the improve-returns check
pub const IMPROVED_RETURN_DELTA_PCT: f64 = 2.0;

/// Improved projection must exceed the current one by this factor
pub const IMPROVED_RETURN_THRESHOLD: f64 = 1.1;

/// Shortfall above this share of target suggests a cheaper alternative
pub const SIGNIFICANT_SHORTFALL_RATIO: f64 = 0.4;

/// Kinds of suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    IncreaseSavings,
    ExtendTimeline,
    ImproveReturns,
    ReduceTarget,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::IncreaseSavings => "increase-savings",
            RecommendationType::ExtendTimeline => "extend-timeline",
            RecommendationType::ImproveReturns => "improve-returns",
            RecommendationType::ReduceTarget => "reduce-target",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase-savings" => Ok(RecommendationType::IncreaseSavings),
            "extend-timeline" => Ok(RecommendationType::ExtendTimeline),
            "improve-returns" => Ok(RecommendationType::ImproveReturns),
            "reduce-target" => Ok(RecommendationType::ReduceTarget),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

/// How strongly a recommendation should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric rank for sorting (higher = more important)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// An actionable suggestion for reaching a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub priority: Priority,
    /// Extra monthly amount, extra years, improved rate or affordable target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_value: Option<f64>,
}

impl Recommendation {
    fn new(
        kind: RecommendationType,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            impact: impact.into(),
            priority,
            action_value: None,
        }
    }

    fn with_action_value(mut self, value: f64) -> Self {
        self.action_value = Some(value);
        self
    }
}

/// Produce the ordered recommendations for an analysis
pub fn generate_recommendations(analysis: &GoalAnalysis) -> Vec<Recommendation> {
    if analysis.is_achievable() {
        return vec![Recommendation::new(
            RecommendationType::IncreaseSavings,
            Priority::Low,
            "Great Progress!",
            "You're on track to achieve your goal! Consider increasing your monthly savings to reach it even faster.",
            "Achieve goal earlier than planned",
        )];
    }

    let recommendations: Vec<Recommendation> = [
        increase_savings(analysis),
        extend_timeline(analysis),
        improve_returns(analysis),
        reduce_target(analysis),
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing::debug!(
        status = analysis.status.as_str(),
        count = recommendations.len(),
        "Generated goal recommendations"
    );

    recommendations
}

fn increase_savings(analysis: &GoalAnalysis) -> Option<Recommendation> {
    let required_monthly = projection::required_monthly_savings(
        analysis.current_savings,
        analysis.target_amount,
        analysis.annual_rate,
        analysis.years,
    );
    let additional = required_monthly - analysis.monthly_contribution;

    if !additional.is_finite() || additional <= 0.0 {
        return None;
    }
    // Zero baseline: any positive ask passes
    let baseline = analysis.monthly_contribution;
    if baseline > 0.0 && additional >= baseline * REASONABLE_ASK_MULTIPLIER {
        return None;
    }

    let additional = additional.round();
    Some(
        Recommendation::new(
            RecommendationType::IncreaseSavings,
            Priority::High,
            "Increase Monthly Savings",
            format!(
                "Increase your monthly contribution by {:.0} to reach your goal on time.",
                additional
            ),
            format!("Total monthly savings: {:.0}", required_monthly.round()),
        )
        .with_action_value(additional),
    )
}

fn extend_timeline(analysis: &GoalAnalysis) -> Option<Recommendation> {
    let years_needed = projection::years_to_goal(
        analysis.current_savings,
        analysis.monthly_contribution,
        analysis.annual_rate,
        analysis.target_amount,
    );

    // NaN when the rate is negative enough that the goal is never reached
    if !years_needed.is_finite()
        || years_needed <= analysis.years
        || years_needed >= analysis.years * REASONABLE_ASK_MULTIPLIER
    {
        return None;
    }

    let additional_years = (years_needed - analysis.years).ceil();
    let unit = if additional_years > 1.0 { "years" } else { "year" };

    Some(
        Recommendation::new(
            RecommendationType::ExtendTimeline,
            Priority::Medium,
            "Extend Goal Timeline",
            format!(
                "Extend your timeline by {:.0} {} to achieve your goal with current savings.",
                additional_years, unit
            ),
            format!("New target date: {:.0} {} later", additional_years, unit),
        )
        .with_action_value(additional_years),
    )
}

fn improve_returns(analysis: &GoalAnalysis) -> Option<Recommendation> {
    let improved_rate = analysis.annual_rate + IMPROVED_RETURN_DELTA_PCT;
    let improved_projection = projection::future_value_with_contributions(
        analysis.current_savings,
        analysis.monthly_contribution,
        improved_rate,
        analysis.years,
    );

    if !improved_projection.is_finite()
        || improved_projection <= analysis.projected_amount * IMPROVED_RETURN_THRESHOLD
    {
        return None;
    }

    Some(
        Recommendation::new(
            RecommendationType::ImproveReturns,
            Priority::Medium,
            "Improve Investment Returns",
            format!(
                "Consider diversifying into higher-return investments like mutual funds or SIPs to earn {}% annual returns.",
                improved_rate
            ),
            format!("Projected savings: {:.0}", improved_projection.round()),
        )
        .with_action_value(improved_rate),
    )
}

fn reduce_target(analysis: &GoalAnalysis) -> Option<Recommendation> {
    if analysis.shortfall <= analysis.target_amount * SIGNIFICANT_SHORTFALL_RATIO {
        return None;
    }

    let affordable_target = analysis.projected_amount.round();
    Some(
        Recommendation::new(
            RecommendationType::ReduceTarget,
            Priority::Low,
            "Consider Alternative Options",
            "Your current goal may be ambitious. Consider starting with a more affordable option or a smaller asset.",
            format!("Affordable target: {:.0}", affordable_target),
        )
        .with_action_value(affordable_target),
    )
}
