//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nestegg - Plan savings toward a future purchase
#[derive(Parser)]
#[command(name = "nestegg")]
#[command(about = "Savings goal projections and recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Market data config file
    ///
    /// Defaults to ~/.local/share/nestegg/config/market.toml when present,
    /// otherwise the built-in table.
    #[arg(long, global = true)]
    pub market_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project savings against a target amount
    Analyze {
        /// Current savings
        #[arg(short, long, default_value = "0")]
        savings: f64,

        /// Monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: f64,

        /// Expected annual return in percent
        #[arg(short, long)]
        rate: f64,

        /// Target amount
        #[arg(short, long)]
        target: f64,

        /// Horizon in years
        #[arg(short, long)]
        years: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Plan the purchase of an asset using market prices
    Plan {
        /// Asset type: car, flat, house, land
        #[arg(short, long)]
        asset: String,

        /// City (unknown cities use default market data)
        #[arg(short, long)]
        location: Option<String>,

        /// Years until purchase (1-30)
        #[arg(short, long)]
        years: Option<u32>,

        /// Monthly contribution
        #[arg(short, long)]
        monthly: Option<f64>,

        /// Current savings
        #[arg(short, long, conflicts_with = "deposits")]
        savings: Option<f64>,

        /// Fixed deposit CSV export to total as current savings
        #[arg(short, long)]
        deposits: Option<PathBuf>,

        /// Expected annual return in percent (0-20)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Today's price, instead of the market average
        #[arg(short, long)]
        price: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Monthly savings needed to reach a target on time
    Required {
        /// Current savings
        #[arg(short, long, default_value = "0")]
        savings: f64,

        /// Target amount
        #[arg(short, long)]
        target: f64,

        /// Expected annual return in percent
        #[arg(short, long)]
        rate: f64,

        /// Horizon in years
        #[arg(short, long)]
        years: f64,
    },

    /// Years needed to reach a target at the current pace
    Years {
        /// Current savings
        #[arg(short, long, default_value = "0")]
        savings: f64,

        /// Monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: f64,

        /// Expected annual return in percent
        #[arg(short, long)]
        rate: f64,

        /// Target amount
        #[arg(short, long)]
        target: f64,
    },

    /// Show market price estimates
    Market {
        /// Only show this asset type
        #[arg(short, long)]
        asset: Option<String>,

        /// Only show this city
        #[arg(short, long)]
        location: Option<String>,
    },
}
