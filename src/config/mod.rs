//! Configuration loading and management for the Settlement Engine.
//!
//! This module provides functionality to load settlement rules from YAML
//! files: the jurisdiction and currency, withholding rates, benefit accrual
//! parameters and the income tax bracket table.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ni").unwrap();
//! println!("Loaded rules for: {}", loader.config().jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{
    BenefitsConfig, CurrencyConfig, JurisdictionMetadata, SettlementConfig, TaxBracketsConfig,
    WithholdingConfig,
};
