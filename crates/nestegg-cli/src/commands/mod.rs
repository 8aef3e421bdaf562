//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Raw projection commands (analyze, required, years)
//! - `core` - Shared utilities (load_config, output formatting)
//! - `market` - Market price listing
//! - `plan` - Asset purchase planning

pub mod analyze;
pub mod core;
pub mod market;
pub mod plan;

// Re-export command functions for main.rs
pub use analyze::*;
pub use core::*;
pub use market::*;
pub use plan::*;
