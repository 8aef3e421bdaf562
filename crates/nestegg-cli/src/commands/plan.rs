//! Asset purchase planning command

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use nestegg_core::{
    parse_deposits_csv, plan_purchase, total_savings, AssetType, Config, PlanRequest,
};

use super::{amount, print_analysis, print_recommendations};

/// Plan command inputs; unset values come from the config defaults
#[derive(Debug, Default)]
pub struct PlanOptions {
    pub asset: String,
    pub location: Option<String>,
    pub years: Option<u32>,
    pub monthly: Option<f64>,
    pub savings: Option<f64>,
    pub deposits: Option<PathBuf>,
    pub rate: Option<f64>,
    pub price: Option<f64>,
}

/// Resolve options against config defaults into a plan request
pub fn build_plan_request(config: &Config, options: &PlanOptions) -> Result<PlanRequest> {
    let asset_type: AssetType = options
        .asset
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let current_savings = match (&options.deposits, options.savings) {
        (Some(path), _) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open deposits file {}", path.display()))?;
            let deposits = parse_deposits_csv(file).context("Failed to read deposits")?;
            tracing::info!(count = deposits.len(), "Loaded fixed deposits");
            total_savings(&deposits)
        }
        (None, Some(savings)) => savings,
        (None, None) => 0.0,
    };

    let defaults = &config.defaults;
    let mut request = PlanRequest::with_defaults(asset_type, current_savings, defaults);
    if let Some(location) = &options.location {
        request.location = location.clone();
    }
    if let Some(years) = options.years {
        request.years = years;
    }
    if let Some(monthly) = options.monthly {
        request.monthly_contribution = monthly;
    }
    if let Some(rate) = options.rate {
        request.annual_rate = rate;
    }
    request.custom_price = options.price;

    Ok(request)
}

pub fn cmd_plan(config: &Config, options: &PlanOptions, json: bool) -> Result<()> {
    let request = build_plan_request(config, options)?;
    let plan = plan_purchase(&config.market, &request).context("Failed to plan purchase")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let asset = request.asset_type;
    println!();
    println!("🏷️  {} in {}", asset.label(), plan.estimate.location);
    println!("   {}", asset.description());
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Market range:         {} - {}",
        amount(plan.estimate.price.min),
        amount(plan.estimate.price.max)
    );
    println!(
        "   Today's price:        {:>14}{}",
        amount(plan.current_price),
        if request.custom_price.is_some() {
            " (custom)"
        } else {
            " (market avg)"
        }
    );
    println!(
        "   Annual appreciation:  {:>13.1}%",
        plan.estimate.appreciation_rate
    );
    println!(
        "   Price in {} years:    {:>14}",
        request.years,
        amount(plan.target_price)
    );

    print_analysis(&plan.analysis);
    print_recommendations(&plan.recommendations);
    Ok(())
}
