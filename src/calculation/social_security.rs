//! Social security (INSS) withholding.
//!
//! The employee contribution is a flat share of the gross monthly salary.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of computing the social security withholding.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// Amount withheld from the monthly salary.
    pub withholding: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `monthly_salary × rate`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_social_security;
/// use rust_decimal::Decimal;
///
/// let result = calculate_social_security(Decimal::from(1200), Decimal::new(7, 2), 1);
/// assert_eq!(result.withholding, Decimal::from(84));
/// ```
pub fn calculate_social_security(
    monthly_salary: Decimal,
    rate: Decimal,
    step_number: u32,
) -> SocialSecurityResult {
    let withholding = monthly_salary * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security Withholding".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "withholding": withholding.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            monthly_salary.normalize(),
            rate.normalize(),
            withholding.normalize()
        ),
    };

    SocialSecurityResult {
        withholding,
        audit_step,
    }
}
