//! Market data listing command

use anyhow::Result;
use nestegg_core::{AssetType, Config, MarketDataSource};

use super::amount;

/// Parse an optional asset filter into the asset types to show
pub fn resolve_assets(asset: Option<&str>) -> Result<Vec<AssetType>> {
    match asset {
        Some(name) => {
            let asset: AssetType = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok(vec![asset])
        }
        None => Ok(AssetType::all().to_vec()),
    }
}

pub fn cmd_market(config: &Config, asset: Option<&str>, location: Option<&str>) -> Result<()> {
    let assets = resolve_assets(asset)?;
    let locations = match location {
        Some(location) => vec![location.to_string()],
        None => config.market.locations(),
    };

    println!();
    println!("🏙️  Market Price Estimates");
    if let Some(source) = &config.source {
        println!("   Source: {}", source.display());
    }
    println!("   ─────────────────────────────────────────────────────────────────────");
    println!(
        "   {:12} │ {:15} │ {:>12} │ {:>12} │ {:>12} │ {:>6}",
        "City", "Asset", "Min", "Avg", "Max", "Appr."
    );
    println!("   ─────────────┼─────────────────┼──────────────┼──────────────┼──────────────┼───────");

    for location in &locations {
        for asset in &assets {
            let estimate = config.market.lookup(*asset, location)?;
            println!(
                "   {:12} │ {:15} │ {:>12} │ {:>12} │ {:>12} │ {:>5.0}%",
                estimate.location,
                asset.label(),
                amount(estimate.price.min),
                amount(estimate.price.avg),
                amount(estimate.price.max),
                estimate.appreciation_rate
            );
        }
    }

    println!();
    println!("   Land prices are per square foot. Unlisted cities use the \"Other\" estimates.");
    Ok(())
}
