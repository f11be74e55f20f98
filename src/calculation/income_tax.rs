//! Monthly income tax (IR) withholding.
//!
//! The monthly salary net of social security is annualized, taxed with the
//! bracket table, and the annual tax is spread evenly over twelve months.

use rust_decimal::Decimal;

use crate::models::{AuditStep, TaxBracketTable};

use super::tax_brackets::evaluate_annual_tax;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of computing the monthly income tax withholding.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// `(monthly_salary - social_security) × 12`.
    pub annual_taxable_income: Decimal,
    /// Tax owed on the annual taxable income.
    pub annual_tax: Decimal,
    /// `annual_tax / 12`.
    pub monthly_withholding: Decimal,
    /// One-based tier that taxed the income.
    pub bracket_tier: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the monthly income tax withholding.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_income_tax;
/// use settlement_engine::config::SettlementConfig;
/// use rust_decimal::Decimal;
///
/// let config = SettlementConfig::nicaragua();
/// // 20000 - 1400 INSS = 18600 a month, 223200 a year
/// let result = calculate_income_tax(
///     Decimal::from(20_000),
///     Decimal::from(1_400),
///     config.tax_brackets(),
///     2,
/// );
/// assert_eq!(result.annual_taxable_income, Decimal::from(223_200));
/// assert_eq!(result.annual_tax, Decimal::from(19_640));
/// assert_eq!(result.bracket_tier, 3);
/// ```
pub fn calculate_income_tax(
    monthly_salary: Decimal,
    social_security_withholding: Decimal,
    brackets: &TaxBracketTable,
    step_number: u32,
) -> IncomeTaxResult {
    let annual_taxable_income = (monthly_salary - social_security_withholding) * MONTHS_PER_YEAR;
    let (index, bracket) = brackets.bracket_for(annual_taxable_income);
    let annual_tax = evaluate_annual_tax(annual_taxable_income, brackets);
    let monthly_withholding = annual_tax / MONTHS_PER_YEAR;
    let bracket_tier = index + 1;

    let upper = bracket
        .upper_bound
        .map(|u| u.normalize().to_string())
        .unwrap_or_else(|| "unbounded".to_string());

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Monthly Income Tax Withholding".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "social_security_withholding": social_security_withholding.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_taxable_income": annual_taxable_income.normalize().to_string(),
            "bracket_tier": bracket_tier,
            "bracket_lower_bound": bracket.lower_bound.normalize().to_string(),
            "bracket_upper_bound": upper,
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_withholding": monthly_withholding.normalize().to_string()
        }),
        reasoning: format!(
            "({} - {}) x 12 = {} falls in tier {}: {} + ({} - {}) x {} = {} per year, / 12 = {}",
            monthly_salary.normalize(),
            social_security_withholding.normalize(),
            annual_taxable_income.normalize(),
            bracket_tier,
            bracket.base_amount.normalize(),
            annual_taxable_income.normalize(),
            bracket.lower_bound.normalize(),
            bracket.marginal_rate.normalize(),
            annual_tax.normalize(),
            monthly_withholding.round_dp(4).normalize()
        ),
    };

    IncomeTaxResult {
        annual_taxable_income,
        annual_tax,
        monthly_withholding,
        bracket_tier,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettlementConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn brackets() -> TaxBracketTable {
        SettlementConfig::nicaragua().tax_brackets().clone()
    }

    #[test]
    fn test_low_salary_pays_no_tax() {
        let result = calculate_income_tax(dec("1200"), dec("84"), &brackets(), 2);

        assert_eq!(result.annual_taxable_income, dec("13392"));
        assert_eq!(result.annual_tax, Decimal::ZERO);
        assert_eq!(result.monthly_withholding, Decimal::ZERO);
        assert_eq!(result.bracket_tier, 1);
    }

    #[test]
    fn test_second_tier_salary() {
        // 12000 - 840 = 11160; x 12 = 133920; (133920 - 100000) x 0.15 = 5088
        let result = calculate_income_tax(dec("12000"), dec("840"), &brackets(), 2);

        assert_eq!(result.annual_taxable_income, dec("133920"));
        assert_eq!(result.annual_tax, dec("5088"));
        assert_eq!(result.monthly_withholding, dec("424"));
        assert_eq!(result.bracket_tier, 2);
    }

    #[test]
    fn test_top_tier_salary() {
        // 60000 - 4200 = 55800; x 12 = 669600; 82500 + 169600 x 0.30 = 133380
        let result = calculate_income_tax(dec("60000"), dec("4200"), &brackets(), 2);

        assert_eq!(result.annual_tax, dec("133380"));
        assert_eq!(result.monthly_withholding, dec("11115"));
        assert_eq!(result.bracket_tier, 5);
        assert_eq!(
            result.audit_step.output["bracket_upper_bound"]
                .as_str()
                .unwrap(),
            "unbounded"
        );
    }

    #[test]
    fn test_zero_salary() {
        let result = calculate_income_tax(Decimal::ZERO, Decimal::ZERO, &brackets(), 2);
        assert_eq!(result.monthly_withholding, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_records_tier_and_amounts() {
        let result = calculate_income_tax(dec("12000"), dec("840"), &brackets(), 7);

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "income_tax");
        assert_eq!(result.audit_step.output["bracket_tier"], 2);
        assert_eq!(
            result.audit_step.output["annual_tax"].as_str().unwrap(),
            "5088"
        );
        assert!(result.audit_step.reasoning.contains("tier 2"));
    }
}
