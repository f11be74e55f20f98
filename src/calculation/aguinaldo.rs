//! Prorated thirteenth-month bonus (aguinaldo).
//!
//! One month's salary per year of service, prorated linearly for partial
//! years with no minimum-service floor.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of computing the prorated bonus.
#[derive(Debug, Clone)]
pub struct ProratedBonusResult {
    /// `monthly_salary × years_equivalent`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the aguinaldo owed for `years_equivalent` years of service.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_prorated_bonus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_prorated_bonus(Decimal::from(1200), Decimal::new(5, 1), 3);
/// assert_eq!(result.amount, Decimal::from(600));
/// ```
pub fn calculate_prorated_bonus(
    monthly_salary: Decimal,
    years_equivalent: Decimal,
    step_number: u32,
) -> ProratedBonusResult {
    let amount = monthly_salary * years_equivalent;

    let audit_step = AuditStep {
        step_number,
        rule_id: "prorated_bonus".to_string(),
        rule_name: "Prorated Aguinaldo".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "years_equivalent": years_equivalent.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} years = {}",
            monthly_salary.normalize(),
            years_equivalent.round_dp(4).normalize(),
            amount.round_dp(4).normalize()
        ),
    };

    ProratedBonusResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_one_year_is_one_salary() {
        let result = calculate_prorated_bonus(dec("1200"), dec("1"), 1);
        assert_eq!(result.amount, dec("1200"));
        assert_eq!(result.audit_step.rule_id, "prorated_bonus");
    }

    #[test]
    fn test_partial_year_prorates_without_floor() {
        let result = calculate_prorated_bonus(dec("1200"), dec("0.25"), 1);
        assert_eq!(result.amount, dec("300"));
    }

    #[test]
    fn test_several_years_accumulate() {
        let result = calculate_prorated_bonus(dec("1500"), dec("3.5"), 1);
        assert_eq!(result.amount, dec("5250"));
    }

    #[test]
    fn test_zero_tenure() {
        let result = calculate_prorated_bonus(dec("1200"), Decimal::ZERO, 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_reasoning_shows_formula() {
        let result = calculate_prorated_bonus(dec("1200"), dec("2"), 1);
        assert_eq!(result.audit_step.reasoning, "1200 x 2 years = 2400");
    }
}
