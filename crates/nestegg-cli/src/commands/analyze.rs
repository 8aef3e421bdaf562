//! Raw projection commands (analyze, required, years)

use anyhow::{Context, Result};
use nestegg_core::{generate_recommendations, projection, GoalAnalysis, GoalInputs};

use super::{amount, print_analysis, print_recommendations};

pub fn cmd_analyze(
    savings: f64,
    monthly: f64,
    rate: f64,
    target: f64,
    years: f64,
    json: bool,
) -> Result<()> {
    let inputs = GoalInputs {
        current_savings: savings,
        monthly_contribution: monthly,
        annual_rate: rate,
        target_amount: target,
        years,
    };
    let analysis = GoalAnalysis::compute(&inputs).context("Invalid goal inputs")?;
    let recommendations = generate_recommendations(&analysis);

    if json {
        let output = serde_json::json!({
            "analysis": analysis,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_analysis(&analysis);
    print_recommendations(&recommendations);
    Ok(())
}

pub fn cmd_required(savings: f64, target: f64, rate: f64, years: f64) -> Result<()> {
    GoalInputs {
        current_savings: savings,
        monthly_contribution: 0.0,
        annual_rate: rate,
        target_amount: target,
        years,
    }
    .validate()
    .context("Invalid goal inputs")?;

    let required = projection::required_monthly_savings(savings, target, rate, years);

    println!();
    println!("🎯 Required Monthly Savings");
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Target {} in {} years at {:.1}% from {} saved",
        amount(target),
        years,
        rate,
        amount(savings)
    );
    if required == 0.0 {
        println!("   ✅ Current savings already cover the target. No contribution needed.");
    } else {
        println!("   Save {} per month", amount(required));
    }
    Ok(())
}

pub fn cmd_years(savings: f64, monthly: f64, rate: f64, target: f64) -> Result<()> {
    if target <= 0.0 {
        anyhow::bail!("Target amount must be positive (got {})", target);
    }
    if savings < 0.0 || monthly < 0.0 {
        anyhow::bail!("Savings and monthly contribution cannot be negative");
    }

    println!();
    println!("⏳ Time to Goal");
    println!("   ─────────────────────────────────────────────");

    if savings >= target {
        println!("   ✅ Current savings already cover the target.");
        return Ok(());
    }

    match reachable_years(savings, monthly, rate, target) {
        Some(years) => {
            let months = (years * 12.0).ceil();
            println!(
                "   {:.1} years ({} months) to reach {}",
                years, months, amount(target)
            );
        }
        None => println!("   ⚠️  Target is not reachable at this rate and contribution."),
    }
    Ok(())
}

/// Years to reach a target not yet covered by savings, None if never reached
pub fn reachable_years(savings: f64, monthly: f64, rate: f64, target: f64) -> Option<f64> {
    let years = projection::years_to_goal(savings, monthly, rate, target);
    // 0 here means no contribution and no growth
    (years.is_finite() && years > 0.0).then_some(years)
}
