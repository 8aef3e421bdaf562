//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Load market data and planner defaults
//! - `print_analysis` / `print_recommendations` - Text output shared by commands

use std::cmp::Reverse;
use std::path::Path;

use anyhow::{Context, Result};
use nestegg_core::{Config, GoalAnalysis, GoalStatus, Priority, Recommendation};

/// Load the market config from an explicit path, the override location, or built-in data
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load(path).context("Failed to load market config")?;
    match &config.source {
        Some(source) => tracing::debug!(path = %source.display(), "Using market config"),
        None => tracing::debug!("Using built-in market config"),
    }
    Ok(config)
}

/// Render an amount without fractional digits
pub fn amount(value: f64) -> String {
    format!("{:.0}", value.round())
}

fn status_icon(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Achievable => "✅",
        GoalStatus::Partially => "⚠️ ",
        GoalStatus::NotAchievable => "❌",
    }
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

pub fn print_analysis(analysis: &GoalAnalysis) {
    println!();
    println!(
        "{} Goal Status: {}",
        status_icon(analysis.status),
        analysis.status.label()
    );
    println!("   ─────────────────────────────────────────────");
    println!("   Current savings:      {:>14}", amount(analysis.current_savings));
    println!(
        "   Monthly contribution: {:>14}",
        amount(analysis.monthly_contribution)
    );
    println!("   Annual return:        {:>13.1}%", analysis.annual_rate);
    println!("   Horizon:              {:>8} years", analysis.years);
    println!();
    println!("   Target amount:        {:>14}", amount(analysis.target_amount));
    println!(
        "   Projected savings:    {:>14}",
        amount(analysis.projected_amount)
    );
    println!("   Progress:             {:>13.1}%", analysis.percentage);

    match analysis.surplus() {
        Some(surplus) => println!("   Surplus:              {:>14}", amount(surplus)),
        None => println!("   Shortfall:            {:>14}", amount(analysis.shortfall)),
    }
}

/// Most important first; equal priorities keep their generated order
pub fn display_order(recommendations: &[Recommendation]) -> Vec<&Recommendation> {
    let mut ordered: Vec<&Recommendation> = recommendations.iter().collect();
    ordered.sort_by_key(|rec| Reverse(rec.priority.rank()));
    ordered
}

pub fn print_recommendations(recommendations: &[Recommendation]) {
    println!();
    println!("💡 Recommendations");
    println!("   ─────────────────────────────────────────────");

    if recommendations.is_empty() {
        println!("   No adjustments found within a reasonable range.");
        return;
    }

    for rec in display_order(recommendations) {
        println!(
            "   {} {} [{}]",
            priority_icon(rec.priority),
            rec.title,
            rec.priority
        );
        println!("      {}", rec.description);
        println!("      → {}", rec.impact);
    }
}
