//! Nestegg CLI - Savings goal planner
//!
//! Usage:
//!   nestegg analyze --rate 7 --target 1000000 --years 5 --monthly 10000
//!   nestegg plan --asset flat --location Pune --deposits fds.csv
//!   nestegg required --target 1000000 --rate 7 --years 5
//!   nestegg market --asset car

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let market_config = cli.market_config.as_deref();

    match cli.command {
        Commands::Analyze {
            savings,
            monthly,
            rate,
            target,
            years,
            json,
        } => commands::cmd_analyze(savings, monthly, rate, target, years, json),
        Commands::Plan {
            asset,
            location,
            years,
            monthly,
            savings,
            deposits,
            rate,
            price,
            json,
        } => {
            let config = commands::load_config(market_config)?;
            let options = commands::PlanOptions {
                asset,
                location,
                years,
                monthly,
                savings,
                deposits,
                rate,
                price,
            };
            commands::cmd_plan(&config, &options, json)
        }
        Commands::Required {
            savings,
            target,
            rate,
            years,
        } => commands::cmd_required(savings, target, rate, years),
        Commands::Years {
            savings,
            monthly,
            rate,
            target,
        } => commands::cmd_years(savings, monthly, rate, target),
        Commands::Market { asset, location } => {
            let config = commands::load_config(market_config)?;
            commands::cmd_market(&config, asset.as_deref(), location.as_deref())
        }
    }
}
