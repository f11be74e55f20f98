//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settlement
//! rules from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::TaxBracketTable;

use super::types::{
    BenefitsConfig, JurisdictionMetadata, SettlementConfig, TaxBracketsConfig, WithholdingConfig,
};

/// Directory the server reads configuration from when none is given.
pub const DEFAULT_CONFIG_DIR: &str = "./config/ni";

/// Loads and provides access to settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ni/
/// ├── jurisdiction.yaml   # Jurisdiction metadata and currency
/// ├── withholdings.yaml   # Social security and payroll deduction rates
/// ├── benefits.yaml       # Daily rate divisor, vacation accrual, severance cap
/// └── tax_brackets.yaml   # Progressive income tax table
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ni")?;
/// let brackets = loader.config().tax_brackets();
/// println!("{} tax brackets", brackets.brackets().len());
/// # Ok::<(), settlement_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SettlementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The bracket table has gaps, overlaps or inconsistent bases (`InvalidTaxBrackets`)
    /// - A rate or day count is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let withholdings = Self::load_yaml::<WithholdingConfig>(&path.join("withholdings.yaml"))?;
        let benefits = Self::load_yaml::<BenefitsConfig>(&path.join("benefits.yaml"))?;
        let brackets = Self::load_yaml::<TaxBracketsConfig>(&path.join("tax_brackets.yaml"))?;

        let tax_brackets = TaxBracketTable::new(brackets.brackets)?;
        let config = SettlementConfig::new(metadata, withholdings, benefits, tax_brackets)?;

        info!(
            jurisdiction = %config.jurisdiction().code,
            version = %config.jurisdiction().version,
            brackets = config.tax_brackets().brackets().len(),
            "Loaded settlement configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SettlementConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying settlement configuration.
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }
}
