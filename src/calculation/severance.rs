//! Severance (indemnización) calculation.
//!
//! One month's salary per year of service, never more than the configured
//! cap in years regardless of actual tenure.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of computing severance.
#[derive(Debug, Clone)]
pub struct SeveranceResult {
    /// `monthly_salary × min(years_equivalent, cap_years)`.
    pub amount: Decimal,
    /// The years actually paid after the cap.
    pub paid_years: Decimal,
    /// True if tenure exceeded the cap.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes severance, capping tenure at `cap_years`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_severance;
/// use rust_decimal::Decimal;
///
/// let capped = calculate_severance(Decimal::from(1200), Decimal::from(20), Decimal::from(5), 5);
/// assert_eq!(capped.amount, Decimal::from(6000));
/// assert!(capped.cap_applied);
/// ```
pub fn calculate_severance(
    monthly_salary: Decimal,
    years_equivalent: Decimal,
    cap_years: Decimal,
    step_number: u32,
) -> SeveranceResult {
    let cap_applied = years_equivalent > cap_years;
    let paid_years = years_equivalent.min(cap_years);
    let amount = monthly_salary * paid_years;

    let reasoning = if cap_applied {
        format!(
            "{} x {} years = {} ({} years of service capped at {})",
            monthly_salary.normalize(),
            paid_years.normalize(),
            amount.normalize(),
            years_equivalent.round_dp(4).normalize(),
            cap_years.normalize()
        )
    } else {
        format!(
            "{} x {} years = {}",
            monthly_salary.normalize(),
            paid_years.round_dp(4).normalize(),
            amount.round_dp(4).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance".to_string(),
        rule_name: "Severance".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "years_equivalent": years_equivalent.normalize().to_string(),
            "cap_years": cap_years.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_years": paid_years.normalize().to_string(),
            "cap_applied": cap_applied,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    SeveranceResult {
        amount,
        paid_years,
        cap_applied,
        audit_step,
    }
}
