//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! Nicaraguan defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{TaxBracket, TaxBracketTable};

/// The single currency amounts are expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code (e.g., "NIO").
    pub code: String,
    /// Symbol printed before amounts (e.g., "C$").
    pub symbol: String,
    /// Plural name appended to the worded total (e.g., "córdobas").
    pub name: String,
}

impl CurrencyConfig {
    /// The Nicaraguan córdoba.
    pub fn cordoba() -> Self {
        Self {
            code: "NIO".to_string(),
            symbol: "C$".to_string(),
            name: "córdobas".to_string(),
        }
    }
}

/// Metadata about the jurisdiction the rules model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "NI").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the rule set.
    pub version: String,
    /// Currency used for all amounts.
    pub currency: CurrencyConfig,
}

/// Flat-rate withholdings from withholdings.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingConfig {
    /// Employee social security (INSS) rate applied to the monthly salary.
    pub social_security_rate: Decimal,
    /// Deduction rate applied to earned salary on the monthly payroll slip.
    pub payroll_deduction_rate: Decimal,
}

/// Benefit accrual parameters from benefits.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsConfig {
    /// Divisor turning a monthly salary into a daily rate.
    pub days_per_month: Decimal,
    /// Vacation days accrued per year of service.
    pub vacation_days_per_year: Decimal,
    /// Maximum years of salary paid as severance.
    pub severance_cap_years: Decimal,
}

/// Tax bracket file structure from tax_brackets.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracketsConfig {
    /// Brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// The complete settlement configuration.
///
/// Shared read-only by every calculation; nothing mutates it after loading.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    metadata: JurisdictionMetadata,
    withholdings: WithholdingConfig,
    benefits: BenefitsConfig,
    tax_brackets: TaxBracketTable,
}

impl SettlementConfig {
    /// Creates a new SettlementConfig from its component parts, validating
    /// rates and day counts.
    pub fn new(
        metadata: JurisdictionMetadata,
        withholdings: WithholdingConfig,
        benefits: BenefitsConfig,
        tax_brackets: TaxBracketTable,
    ) -> EngineResult<Self> {
        check_fraction("social_security_rate", withholdings.social_security_rate)?;
        check_fraction("payroll_deduction_rate", withholdings.payroll_deduction_rate)?;
        check_positive("days_per_month", benefits.days_per_month)?;
        check_non_negative("vacation_days_per_year", benefits.vacation_days_per_year)?;
        check_non_negative("severance_cap_years", benefits.severance_cap_years)?;

        Ok(Self {
            metadata,
            withholdings,
            benefits,
            tax_brackets,
        })
    }

    /// The built-in Nicaraguan rule set: 7% INSS, the five-tier IR table,
    /// 30-day months, 15 vacation days per year and a five-year severance cap.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::config::SettlementConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = SettlementConfig::nicaragua();
    /// assert_eq!(config.withholdings().social_security_rate, Decimal::new(7, 2));
    /// assert_eq!(config.tax_brackets().brackets().len(), 5);
    /// ```
    pub fn nicaragua() -> Self {
        let bracket = |lower: i64, upper: Option<i64>, rate: Decimal, base: i64| TaxBracket {
            lower_bound: Decimal::from(lower),
            upper_bound: upper.map(Decimal::from),
            marginal_rate: rate,
            base_amount: Decimal::from(base),
        };

        Self {
            metadata: JurisdictionMetadata {
                code: "NI".to_string(),
                name: "Nicaragua".to_string(),
                version: "built-in".to_string(),
                currency: CurrencyConfig::cordoba(),
            },
            withholdings: WithholdingConfig {
                social_security_rate: Decimal::new(7, 2),
                payroll_deduction_rate: Decimal::new(9, 2),
            },
            benefits: BenefitsConfig {
                days_per_month: Decimal::from(30),
                vacation_days_per_year: Decimal::from(15),
                severance_cap_years: Decimal::from(5),
            },
            // Consistent by construction; covered by test_builtin_brackets_validate.
            tax_brackets: TaxBracketTable::from_validated(vec![
                bracket(0, Some(100_000), Decimal::ZERO, 0),
                bracket(100_000, Some(200_000), Decimal::new(15, 2), 0),
                bracket(200_000, Some(350_000), Decimal::new(20, 2), 15_000),
                bracket(350_000, Some(500_000), Decimal::new(25, 2), 45_000),
                bracket(500_000, None, Decimal::new(30, 2), 82_500),
            ]),
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the currency amounts are expressed in.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.metadata.currency
    }

    /// Returns the withholding rates.
    pub fn withholdings(&self) -> &WithholdingConfig {
        &self.withholdings
    }

    /// Returns the benefit accrual parameters.
    pub fn benefits(&self) -> &BenefitsConfig {
        &self.benefits
    }

    /// Returns the income tax bracket table.
    pub fn tax_brackets(&self) -> &TaxBracketTable {
        &self.tax_brackets
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self::nicaragua()
    }
}

fn check_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be between 0 and 1, found {}", value),
        });
    }
    Ok(())
}

fn check_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be greater than 0, found {}", value),
        });
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must not be negative, found {}", value),
        });
    }
    Ok(())
}
