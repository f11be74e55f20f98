//! Prorated salary for the months and days beyond whole years.
//!
//! Pays `(monthly_salary / 30) × (months × 30 + days)`. The months and days
//! of the tenure are also part of `years_equivalent`, so when tenure is given
//! as total elapsed time the sub-year portion is paid both here and through
//! the bonus, vacation and severance lines. The audit step says so.

use rust_decimal::Decimal;

use crate::models::{AuditStep, TenurePeriod};

/// The result of computing the prorated partial salary.
#[derive(Debug, Clone)]
pub struct PartialSalaryResult {
    /// `months × days_per_month + days`.
    pub days: Decimal,
    /// `monthly_salary / days_per_month × days`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes salary owed for the sub-year remainder of the tenure.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_prorated_partial_salary;
/// use settlement_engine::models::TenurePeriod;
/// use rust_decimal::Decimal;
///
/// let tenure = TenurePeriod::new(2, 1, 15);
/// let result = calculate_prorated_partial_salary(Decimal::from(1200), &tenure, Decimal::from(30), 6);
///
/// // 45 days at 40 a day
/// assert_eq!(result.days, Decimal::from(45));
/// assert_eq!(result.amount, Decimal::from(1800));
/// ```
pub fn calculate_prorated_partial_salary(
    monthly_salary: Decimal,
    tenure: &TenurePeriod,
    days_per_month: Decimal,
    step_number: u32,
) -> PartialSalaryResult {
    let daily_rate = monthly_salary / days_per_month;
    let days = Decimal::from(tenure.months) * days_per_month + Decimal::from(tenure.days);
    let amount = daily_rate * days;

    let mut reasoning = format!(
        "{} / {} = {} per day x ({} months x {} + {} days = {} days) = {}",
        monthly_salary.normalize(),
        days_per_month.normalize(),
        daily_rate.round_dp(4).normalize(),
        tenure.months,
        days_per_month.normalize(),
        tenure.days,
        days.normalize(),
        amount.round_dp(4).normalize()
    );
    if tenure.months > 0 || tenure.days > 0 {
        reasoning.push_str(
            "; these months and days are also counted in years_equivalent for bonus, vacation and severance",
        );
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "prorated_partial_salary".to_string(),
        rule_name: "Prorated Partial Salary".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "months": tenure.months,
            "days": tenure.days
        }),
        output: serde_json::json!({
            "days": days.normalize().to_string(),
            "daily_rate": daily_rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    PartialSalaryResult {
        days,
        amount,
        audit_step,
    }
}
