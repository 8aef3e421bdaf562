//! Nestegg Core Library
//!
//! Savings goal planning for the Nestegg personal finance tool:
//! - Projection engine (compound growth, annuities, time-to-goal)
//! - Goal analysis and status classification
//! - Recommendation generator
//! - Market price data for asset goals (injected, read-only)
//! - Asset purchase planner
//! - Fixed deposit ledger import

pub mod analysis;
pub mod config;
pub mod deposits;
pub mod error;
pub mod market;
pub mod planner;
pub mod projection;
pub mod recommendations;

pub use analysis::{GoalAnalysis, GoalInputs, GoalStatus};
pub use config::Config;
pub use deposits::{parse_deposits_csv, total_savings, FixedDeposit};
pub use error::{Error, Result};
pub use market::{AssetType, MarketDataSource, MarketTable, PriceEstimate, PriceRange};
pub use planner::{plan_purchase, AssetPlan, PlanRequest, PlannerDefaults};
pub use recommendations::{generate_recommendations, Priority, Recommendation, RecommendationType};
